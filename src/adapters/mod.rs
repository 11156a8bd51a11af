//! Adapters - boundary concerns around the domain core.

pub mod ingestion;
