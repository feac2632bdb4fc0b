//! Error types for reading and writing CoNLL trees

use crate::field::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single input line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 10 tab-separated fields, got {found} @ {line}")]
    FieldCount { found: usize, line: String },

    #[error("field 0: expected {expected:?}, got {found:?}")]
    NodeId { expected: String, found: String },

    #[error("field {index}: empty")]
    EmptyField { index: usize },

    #[error("field 6: invalid HEAD {value:?}")]
    Head { value: String },

    #[error("invalid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// Error while reading trees from a CoNLL source
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open CoNLL file {path:?}: {error}")]
    Open {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("I/O error while reading CoNLL file {file:?}, line {line}: {error}")]
    Io {
        file: String,
        line: usize,
        #[source]
        error: std::io::Error,
    },

    #[error("error while reading CoNLL file {file:?}, line {line}: {reason}")]
    Format {
        file: String,
        line: usize,
        #[source]
        reason: FormatError,
    },
}

impl ReadError {
    /// 1-based line the error is attributed to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            ReadError::Open { .. } => None,
            ReadError::Io { line, .. } | ReadError::Format { line, .. } => Some(*line),
        }
    }

    /// The line-level reason for a format error
    pub fn reason(&self) -> Option<&FormatError> {
        match self {
            ReadError::Format { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Error while writing a tree in CoNLL format
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("invalid {field}: {value:?}")]
    InvalidField { field: Field, value: String },

    #[error("invalid FEATS: {value:?}")]
    InvalidFeats { value: Vec<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Error while assembling a tree from columns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("column {column} has {found} entries, expected {expected}")]
    ColumnLength {
        column: &'static str,
        expected: usize,
        found: usize,
    },
}
