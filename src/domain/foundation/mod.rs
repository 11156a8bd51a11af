//! Shared domain primitives (value objects and error types).

mod errors;
mod ratio;

pub use errors::{require_non_negative, require_positive, InvalidInputError, MalformedRowError};
pub use ratio::TargetRatio;
