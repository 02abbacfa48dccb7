use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("missing mandatory '{section}' section in {format} data")]
    MissingSection {
        format: Format,
        section: &'static str,
    },

    #[error("inconsistent {format} data: {details}")]
    Inconsistent { format: Format, details: String },
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }

    pub fn inconsistent(format: Format, details: impl Into<String>) -> Self {
        Self::Inconsistent {
            format,
            details: details.into(),
        }
    }
}
