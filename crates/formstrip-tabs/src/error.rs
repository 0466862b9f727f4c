//! Tab strip error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Tab strip cannot be empty")]
    Empty,

    #[error("Duplicate tab id: {0}")]
    DuplicateId(String),
}
