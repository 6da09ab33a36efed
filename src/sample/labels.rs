use serde::{Serialize, Deserialize};

use crate::error::{BoostError, Result};


/// Maps the (at most two) training labels to the internal votes `±1`.
/// The smaller label votes `-1`, the larger one `+1`.
/// A single-class training set maps its only label to `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMap {
    negative: f64,
    positive: f64,
}


impl LabelMap {
    /// Build the mapping from the labels of a training set.
    pub fn from_labels(labels: &[f64]) -> Result<Self> {
        if labels.iter().any(|y| !y.is_finite()) {
            return Err(BoostError::NonFiniteValue);
        }

        let mut distinct = labels.to_vec();
        distinct.sort_by(|a, b| a.total_cmp(b));
        distinct.dedup();

        match distinct[..] {
            [] => Err(BoostError::EmptyTrainingSet),
            [only] => Ok(Self { negative: only, positive: only }),
            [negative, positive] => Ok(Self { negative, positive }),
            _ => Err(BoostError::UnsupportedLabels(distinct.len())),
        }
    }


    /// Returns the label voted by `-1`.
    pub fn negative(&self) -> f64 {
        self.negative
    }


    /// Returns the label voted by `+1`.
    pub fn positive(&self) -> f64 {
        self.positive
    }


    /// Convert a label to its vote.
    #[inline]
    pub fn to_vote(&self, label: f64) -> f64 {
        if label == self.positive { 1f64 } else { -1f64 }
    }


    /// Convert an ensemble response to a label.
    /// Non-negative responses map to the positive label.
    #[inline]
    pub fn to_label(&self, response: f64) -> f64 {
        if response >= 0f64 { self.positive } else { self.negative }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_two_labels() {
        let map = LabelMap::from_labels(&[1.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(map.negative(), 0.0);
        assert_eq!(map.positive(), 1.0);
        assert_eq!(map.to_vote(0.0), -1.0);
        assert_eq!(map.to_vote(1.0), 1.0);
        assert_eq!(map.to_label(-0.3), 0.0);
        assert_eq!(map.to_label(0.0), 1.0);
    }

    #[test]
    fn single_class_votes_positive() {
        let map = LabelMap::from_labels(&[7.0]).unwrap();
        assert_eq!(map.negative(), map.positive());
        assert_eq!(map.to_vote(7.0), 1.0);
        assert_eq!(map.to_label(-1.0), 7.0);
    }

    #[test]
    fn rejects_bad_labels() {
        let err = LabelMap::from_labels(&[0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, BoostError::UnsupportedLabels(3)));

        let err = LabelMap::from_labels(&[0.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, BoostError::NonFiniteValue));
    }
}
