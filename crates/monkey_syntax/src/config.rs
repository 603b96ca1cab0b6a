//! Parser configuration.
//!
//! The parser is recursive: every prefix operator and every right-hand operand of an infix operator costs a
//! stack frame. The depth limit turns pathological inputs (`------…1`) into a diagnostic instead of a stack
//! overflow.

/// Default maximum nesting of expressions.
pub const DEFAULT_MAX_EXPRESSION_DEPTH: usize = 256;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested `parse_expression` calls before the parser gives up on a statement
    pub max_expression_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_expression_depth: DEFAULT_MAX_EXPRESSION_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum expression nesting depth
    pub fn with_max_expression_depth(mut self, depth: usize) -> Self {
        self.max_expression_depth = depth;
        self
    }
}
