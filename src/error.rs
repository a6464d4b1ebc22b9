//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    /// A record without a `review/time` field.
    /// `position` is the record's place in file order.
    MissingTimestamp {
        position: usize,
    },
    /// `review/time` is not an integer or is out of the representable range.
    InvalidTimestamp {
        position: usize,
        value: String,
    },
    /// Triple emission was requested on a dataset with no records.
    EmptyDataset,
    /// A record reached linking or emission without a chronological id.
    Unindexed,
    UnknownRelation(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "tsv error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::MissingTimestamp { position } => {
                write!(f, "record {} has no review/time field", position)
            }
            Error::InvalidTimestamp { position, value } => {
                write!(f, "record {} has an invalid timestamp: {:?}", position, value)
            }
            Error::EmptyDataset => write!(f, "no complete review record found in input"),
            Error::Unindexed => write!(f, "record has no chronological id"),
            Error::UnknownRelation(r) => write!(f, "relation {} is not in the vocabulary", r),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
