//! Errors raised while reading an outline from a byte stream
//!
//! Parsing itself is total. The only failures come from the input: bytes that
//! are not UTF-8, or a reader that errors out. Both stop the read.

use crate::ast::Outline;
use std::fmt;
use std::io;
use std::str::Utf8Error;

/// A line could not be decoded as text.
#[derive(Debug, Clone)]
pub struct DecodeError {
    /// 1-based line number within the read
    pub line: usize,
    pub source: Utf8Error,
    /// Everything built before the offending line
    pub partial: Outline,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} is not valid UTF-8: {}", self.line, self.source)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug)]
pub enum ReadError {
    Decode(DecodeError),
    Io(io::Error),
}

impl ReadError {
    /// The forest built before a decode error, if that is what stopped the read
    pub fn partial(&self) -> Option<&Outline> {
        match self {
            ReadError::Decode(err) => Some(&err.partial),
            ReadError::Io(_) => None,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Decode(err) => write!(f, "Decode error: {err}"),
            ReadError::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Decode(err) => Some(err),
            ReadError::Io(err) => Some(err),
        }
    }
}

impl From<DecodeError> for ReadError {
    fn from(err: DecodeError) -> Self {
        ReadError::Decode(err)
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}
