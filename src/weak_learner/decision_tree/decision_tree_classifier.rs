//! Defines the decision tree classifier.
use crate::Classifier;


use super::node::*;
use serde::{Serialize, Deserialize};


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn confidence(&self, x: &[f64]) -> f64 {
        self.root.confidence(x)
    }
}


impl DecisionTreeClassifier {
    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth. A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns `true` if every split reads a feature below `n_feature`
    /// and every number in the tree is finite.
    pub fn is_valid_for(&self, n_feature: usize) -> bool {
        self.root.is_valid_for(n_feature)
    }
}
