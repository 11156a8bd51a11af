//! Application layer - validated services over the domain calculators.

mod audit;

pub use audit::{BlockAudit, BlockAuditOutcome};
