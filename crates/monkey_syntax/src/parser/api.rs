/// Result of a full parse: the (possibly partial) program plus every diagnostic found.
///
/// ## Notes
/// - Parsing succeeded iff `errors` is empty; there is no separate success flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Return `true` if no diagnostics were recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Diagnostic messages, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Convert into a `Result`, discarding the partial program when there are diagnostics.
    ///
    /// ## Errors
    /// Returns every recorded [`ParseError`] if parsing was not fully successful.
    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parse source text into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: Monkey source text.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> ParseOutput {
    parse_with_config(source, ParserConfig::default())
}

/// Parse source text with an explicit [`ParserConfig`].
pub fn parse_with_config(source: &str, config: ParserConfig) -> ParseOutput {
    let mut parser = Parser::with_config(Lexer::new(source), config);
    let program = parser.parse_program();
    let errors = parser.into_errors();
    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "parse finished with diagnostics");
    }
    ParseOutput { program, errors }
}
