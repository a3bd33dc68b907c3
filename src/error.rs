// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Error type shared by the generator, binner and statistics.

use std::{error::Error, fmt, io};

/// Errors raised by the analysis pipeline.
#[derive(Debug)]
pub enum LcgError {
    /// A generator or binning parameter is out of range.
    InvalidParameter(String),
    /// A statistic was requested on input for which it is undefined.
    InvalidInput(String),
    Io(io::Error),
}

impl fmt::Display for LcgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LcgError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            LcgError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            LcgError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl Error for LcgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LcgError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LcgError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, LcgError>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn display_names_the_kind() {
        let e = LcgError::InvalidParameter("modulus must be positive".to_owned());
        assert_eq!(e.to_string(), "invalid parameter: modulus must be positive");
        let e = LcgError::InvalidInput("empty sequence".to_owned());
        assert_eq!(e.to_string(), "invalid input: empty sequence");
    }

    #[test]
    fn io_errors_convert_and_keep_source() {
        let e: LcgError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, LcgError::Io(_)));
        assert!(e.source().is_some());
    }
}
