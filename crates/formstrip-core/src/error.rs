//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab strip error: {0}")]
    Strip(#[from] formstrip_tabs::StripError),
}
