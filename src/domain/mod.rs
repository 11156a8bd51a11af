//! Domain layer containing the SBCM calculation and classification logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `scale` - Reference scale constants (`ScaleParameters`)
//! - `block` - Standard Block Calculator and impact-index tiers
//! - `distortion` - Batch distortion analysis over budget tables

pub mod block;
pub mod distortion;
pub mod foundation;
pub mod scale;
