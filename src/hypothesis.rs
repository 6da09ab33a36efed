//! The core library for `Hypothesis` traits
//! and the trained ensemble.

pub(crate) mod hypothesis_traits;
pub(crate) mod ensemble;


pub use hypothesis_traits::Classifier;
pub use ensemble::Ensemble;
