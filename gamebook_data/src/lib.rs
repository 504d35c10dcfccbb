//! Shared data model for gamebook stories.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_story};
