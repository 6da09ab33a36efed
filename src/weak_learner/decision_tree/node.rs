//! Defines the inner representation
//! of the Decision Tree class.
use crate::Classifier;


use crate::weak_learner::common::{
    type_and_struct::*,
    split_rule::*,
};
use super::train_node::*;


use serde::{Serialize, Deserialize};


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>
    ) -> Self
    {
        Self { rule, left, right, }
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) confidence: Confidence<f64>,
}


impl LeafNode {
    /// Returns a `LeafNode` that outputs the confidence
    /// given to this function.
    #[inline]
    pub(crate) fn from_raw(confidence: Confidence<f64>) -> Self {
        Self { confidence }
    }
}


impl From<TrainBranchNode> for BranchNode {
    #[inline]
    fn from(branch: TrainBranchNode) -> Self {
        let left = Node::from(*branch.left);
        let right = Node::from(*branch.right);

        Self::from_raw(
            branch.rule,
            Box::new(left),
            Box::new(right),
        )
    }
}


impl From<TrainLeafNode> for LeafNode {
    #[inline]
    fn from(leaf: TrainLeafNode) -> Self {
        Self::from_raw(leaf.confidence)
    }
}


impl From<TrainNode> for Node {
    #[inline]
    fn from(train_node: TrainNode) -> Self {
        match train_node {
            TrainNode::Branch(node) => {
                Node::Branch(node.into())
            },
            TrainNode::Leaf(node) => {
                Node::Leaf(node.into())
            }
        }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn confidence(&self, _x: &[f64]) -> f64 {
        self.confidence.0
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn confidence(&self, x: &[f64]) -> f64 {
        match self.rule.split(x) {
            LR::Left => self.left.confidence(x),
            LR::Right => self.right.confidence(x)
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn confidence(&self, x: &[f64]) -> f64 {
        match self {
            Node::Branch(ref node) => node.confidence(x),
            Node::Leaf(ref node) => node.confidence(x)
        }
    }
}


impl Node {
    /// Returns the number of leaves of this sub-tree.
    pub(super) fn leaves(&self) -> usize {
        match self {
            Node::Branch(b) => b.left.leaves() + b.right.leaves(),
            Node::Leaf(_) => 1,
        }
    }


    /// Returns the depth of this sub-tree. A leaf has depth `0`.
    pub(super) fn depth(&self) -> usize {
        match self {
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
            Node::Leaf(_) => 0,
        }
    }


    /// Checks that every split refers to a feature below `n_feature`
    /// and that every value is finite.
    pub(super) fn is_valid_for(&self, n_feature: usize) -> bool {
        match self {
            Node::Branch(b) => {
                b.rule.feature < n_feature
                    && b.rule.threshold.0.is_finite()
                    && b.left.is_valid_for(n_feature)
                    && b.right.is_valid_for(n_feature)
            },
            Node::Leaf(l) => l.confidence.0.is_finite(),
        }
    }
}
