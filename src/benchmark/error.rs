use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::result;

/// An enum representing the ways the benchmark driver can fail.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    ParseError(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::ParseError(err.to_string())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::ParseError(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::ParseError(message) => write!(f, "invalid arguments: {}", message),
        }
    }
}

/// Convenience `Result` type for the benchmark driver.
pub type Result<T> = result::Result<T, Error>;
