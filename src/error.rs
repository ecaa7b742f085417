use std::error::Error;
use std::fmt;
use std::io;

/// Error type for network construction, wiring, and persistence.
#[derive(Debug)]
pub enum NetError {
    /// Bad layer list: empty, or a zero-sized layer.
    InvalidTopology(String),
    /// Wiring descriptor references something that does not exist.
    InvalidWiring(String),
    /// Model file path (base name plus `.ntic`) exceeds the fixed name budget.
    PathTooLong(String),
    /// Model file failed magic/version validation or is internally inconsistent.
    BadFormat(String),
    /// Underlying file I/O failure.
    Io(io::Error),
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::InvalidTopology(msg) => write!(f, "invalid topology: {}", msg),
            NetError::InvalidWiring(msg) => write!(f, "invalid wiring: {}", msg),
            NetError::PathTooLong(path) => write!(f, "path too long: {}", path),
            NetError::BadFormat(msg) => write!(f, "bad model file: {}", msg),
            NetError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl Error for NetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for NetError {
    fn from(err: io::Error) -> NetError {
        NetError::Io(err)
    }
}

pub type NetResult<T> = Result<T, NetError>;
