use std::fmt;

/// Represents all errors that can occur during parsing.
///
/// Every variant records the source line and what was found there, so the
/// message alone is enough to locate the problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A specific token was required but something else was found.
    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Description of the expected token, e.g. `'='`.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot start an expression.
    #[error("line {line}: expected an expression, found {found}")]
    NoPrefixRule {
        /// Description of the token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer could not recognize a character sequence.
    #[error("line {line}: illegal token `{text}`")]
    IllegalToken {
        /// The unrecognized text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("line {line}: could not parse `{literal}` as integer")]
    InvalidInteger {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The left side of `=` is not a plain identifier.
    #[error("line {line}: cannot assign to {target}")]
    InvalidAssignmentTarget {
        /// Canonical form of the rejected target.
        target: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// The line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixRule { line, .. }
            | Self::IllegalToken { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::InvalidAssignmentTarget { line, .. } => *line,
        }
    }
}

/// Every syntax error reported for one source text, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrors(pub Vec<ParseError>);

impl fmt::Display for SyntaxErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Parser error: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxErrors {}
