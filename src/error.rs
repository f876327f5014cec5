use thiserror::Error;

use crate::model::FormField;
use crate::nav::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,

    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpiryError {
    #[error("expiry {0:?} does not start with a number")]
    MissingNumber(String),

    #[error("expiry {0:?} is out of range")]
    TooLarge(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(FormField),

    #[error("sign-in rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("cannot {action} from {from:?}")]
    InvalidTransition { from: Screen, action: &'static str },

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no browser window")]
    NoWindow,

    #[error("JSON decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}
