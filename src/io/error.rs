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

    #[error("{format} input is missing the required field '{field}'")]
    MissingField { format: Format, field: &'static str },

    #[error("invalid {format} record #{index}: {details}")]
    InvalidRecord {
        format: Format,
        index: usize,
        details: String,
    },

    #[error("failed to encode {format} output: {details}")]
    Serialize { format: Format, details: String },
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        let line = e
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or_default();
        let details = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(source) => Error::Io { source },
            csv::ErrorKind::Serialize(msg) => Error::Serialize {
                format: Format::Csv,
                details: msg,
            },
            _ => Error::parse(Format::Csv, line, details),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match e.classify() {
            Category::Io => Error::Io {
                source: std::io::Error::from(e),
            },
            Category::Syntax | Category::Data | Category::Eof => {
                Error::parse(Format::Json, e.line(), e.to_string())
            }
        }
    }
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }

    pub fn invalid_record(format: Format, index: usize, details: impl Into<String>) -> Self {
        Self::InvalidRecord {
            format,
            index,
            details: details.into(),
        }
    }
}
