//! Error types for gradient parsing.

/// Result type alias for gradient operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported when parsing a gradient from a string.
///
/// Converters themselves never produce these; they either return a value or
/// nothing. Errors only appear at the string entry points, which know the
/// whole input and can say where it went wrong.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A gradient function was recognized but its arguments were malformed,
    /// or unexpected input followed it.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// The input does not start with any registered gradient function.
    #[error("Unknown gradient function '{name}'")]
    UnknownFunction { name: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an unknown-function error.
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::parse("Expected ','", 1, 17);
        assert_eq!(
            err.to_string(),
            "CSS parse error at line 1, column 17: Expected ','"
        );

        let err = Error::unknown_function("conic-gradient");
        assert_eq!(err.to_string(), "Unknown gradient function 'conic-gradient'");
    }
}
