pub mod error;
pub mod inputs;
pub mod placement;
pub mod prediction;
