use csv::Error as CsvError;
use serde::de::DeserializeOwned;
use std::{fmt, io};

#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    Csv(CsvError),
    MissingColumn(String),
}

impl ReadError {
    /// Whether the error stops the whole read rather than a single record.
    pub fn is_fatal(&self) -> bool {
        match self {
            ReadError::Io(_) | ReadError::MissingColumn(_) => true,
            ReadError::Csv(err) => err.is_io_error(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "I/O error: {}", err),
            ReadError::Csv(err) => write!(f, "CSV error: {}", err),
            ReadError::MissingColumn(column) => write!(f, "missing column: {}", column),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Csv(err) => Some(err),
            ReadError::MissingColumn(_) => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl From<CsvError> for ReadError {
    fn from(err: CsvError) -> Self {
        ReadError::Csv(err)
    }
}

pub type Records<T> = Box<dyn Iterator<Item = Result<T, ReadError>>>;

pub trait Parser {
    fn parse<T>(&self, file_path: &str) -> Result<Records<T>, ReadError>
    where
        T: DeserializeOwned + 'static;
}
