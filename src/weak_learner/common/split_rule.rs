//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::weak_learner::type_and_struct::*;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}


/// Sends `x` to the left child iff `x[feature] < threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: Threshold,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: Threshold) -> Self {
        Self { feature, threshold }
    }


    /// Defines the splitting.
    #[inline]
    pub(crate) fn split(&self, x: &[f64]) -> LR {
        if x[self.feature] < self.threshold.0 {
            LR::Left
        } else {
            LR::Right
        }
    }
}
