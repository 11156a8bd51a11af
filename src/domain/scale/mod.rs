//! Scale parameters defining the reference comparison frame.

mod parameters;

pub use parameters::{
    ScaleParameters, DEFAULT_MUNICIPALITY_COUNT, DEFAULT_NATIONAL_POPULATION,
    DEFAULT_STANDARD_BLOCK_POPULATION, DEFAULT_STANDARD_BUDGET_UNIT,
};
