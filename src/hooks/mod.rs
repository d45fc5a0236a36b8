pub mod use_placement;
pub mod use_prediction;
