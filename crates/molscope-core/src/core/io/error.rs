use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed {format} input: {details} (at line {line})")]
    MalformedInput {
        format: Format,
        line: usize,
        details: String,
    },
}

impl ParseError {
    pub fn malformed(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::MalformedInput {
            format,
            line,
            details: details.into(),
        }
    }
}
