use serde::{Serialize, Deserialize};
use std::ops::Index;


/// Tag describing a column of the training matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    /// Ordered numeric values.
    Numerical,
    /// Values from a finite set of categories.
    Categorical,
}


/// Dense representation of a numeric feature (one column).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub(crate) name: String,
    /// Feature values, indexed by sample.
    pub(crate) sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            sample: Vec::new(),
        }
    }


    /// Construct a feature from its values.
    pub fn from_values<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        Self { name: name.to_string(), sample, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the feature values.
    pub fn values(&self) -> &[f64] {
        &self.sample[..]
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.sample.push(x);
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if the feature holds no value.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    /// Returns the new feature that holds the values at `indices`.
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        let sample = indices.iter()
            .map(|&i| self.sample[i])
            .collect();
        Self { name: self.name.clone(), sample, }
    }
}


impl Index<usize> for Feature {
    type Output = f64;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}
