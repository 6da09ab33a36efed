//! Provides the boosting engine and its building blocks.

mod core;
pub mod weighting;
mod adaboost;
pub mod cross_validation;


/// Booster trait
pub use self::core::{Booster, Termination};

pub use self::weighting::SampleWeighting;
pub use self::adaboost::BoostEngine;
pub use self::cross_validation::CrossValidation;
