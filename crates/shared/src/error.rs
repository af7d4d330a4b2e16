use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ContentSlice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentErrorKind {
    FetchFailure,
    ParseFailure,
    ShapeMismatch,
}

/// Why a content slice could not be loaded. Never fatal to a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("failed to fetch {slice} content from {url}: {message}")]
    Transport {
        slice: ContentSlice,
        url: String,
        message: String,
    },
    #[error("{slice} content request to {url} returned status {status}")]
    Status {
        slice: ContentSlice,
        url: String,
        status: u16,
    },
    #[error("malformed {slice} content: {message}")]
    Parse { slice: ContentSlice, message: String },
    #[error("portfolio document has neither a bare item list nor an `items` list")]
    ShapeMismatch,
}

impl ContentError {
    pub fn kind(&self) -> ContentErrorKind {
        match self {
            ContentError::Transport { .. } | ContentError::Status { .. } => {
                ContentErrorKind::FetchFailure
            }
            ContentError::Parse { .. } => ContentErrorKind::ParseFailure,
            ContentError::ShapeMismatch => ContentErrorKind::ShapeMismatch,
        }
    }

    pub fn slice(&self) -> ContentSlice {
        match self {
            ContentError::Transport { slice, .. }
            | ContentError::Status { slice, .. }
            | ContentError::Parse { slice, .. } => *slice,
            ContentError::ShapeMismatch => ContentSlice::Portfolio,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {what} `{value}`")]
pub struct UnknownVariant {
    pub what: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(what: &'static str, value: impl Into<String>) -> Self {
        Self {
            what,
            value: value.into(),
        }
    }
}
