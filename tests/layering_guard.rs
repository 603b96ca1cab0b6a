//! Layering guardrails for the workspace crates.
//!
//! `monkey_core` is a pure vocabulary crate and must stay dependency-free; `monkey_syntax` may depend on
//! `monkey_core` but never on the `monkey` facade crate. These tests scan the manifests and fail if either rule
//! is broken.

/// Return the non-comment entries of the `[dependencies]` table in `manifest`.
fn dependency_lines(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if !line_no_comment.is_empty() {
            deps.push(line_no_comment.to_string());
        }
    }

    deps
}

#[test]
fn core_has_no_dependencies() {
    let deps = dependency_lines(include_str!("../crates/monkey_core/Cargo.toml"));
    assert!(deps.is_empty(), "`monkey_core` must stay dependency-free, found: {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_facade() {
    let deps = dependency_lines(include_str!("../crates/monkey_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d.starts_with("monkey_core")));
    assert!(
        !deps.iter().any(|d| d.starts_with("monkey ") || d.starts_with("monkey=")),
        "`monkey_syntax` must not depend on the `monkey` facade crate"
    );
}
