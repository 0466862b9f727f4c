//! formstrip Tab Collection
//!
//! Owns the ordered list of tab records for the form-builder tab strip.
//! Tabs are ordered, named, uniquely identified, and exactly one is active
//! whenever the collection is non-empty.

mod error;
mod strip;
mod tab;

pub use error::StripError;
pub use strip::{TabStrip, DEFAULT_COPY_SUFFIX, DEFAULT_NEW_TITLE};
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, StripError>;
