//! Defines the inner representation
//! of the Decision Tree class while growing.
use crate::weak_learner::common::{
    type_and_struct::*,
    split_rule::*,
};

use std::fmt;


/// Enumeration of `TrainBranchNode` and `TrainLeafNode`.
pub(crate) enum TrainNode {
    /// A node that have two childrens.
    Branch(TrainBranchNode),


    /// A node that have no child.
    Leaf(TrainLeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `TrainBranchNode` must have two childrens
pub(crate) struct TrainBranchNode {
    // Splitting rule
    pub(super) rule: Splitter,


    // Left child
    pub(super) left: Box<TrainNode>,


    // Right child
    pub(super) right: Box<TrainNode>,


    // The value this node outputs if it becomes a leaf.
    pub(super) confidence: Confidence<f64>,


    // Total mass on this node.
    pub(super) total_weight: f64,


    pub(self) leaves: usize,
}


/// Represents the leaf nodes of decision tree.
pub(crate) struct TrainLeafNode {
    pub(super) confidence: Confidence<f64>,
    pub(super) total_weight: f64,
}


impl From<TrainBranchNode> for TrainLeafNode {
    #[inline]
    fn from(branch: TrainBranchNode) -> Self {
        Self {
            confidence: branch.confidence,
            total_weight: branch.total_weight,
        }
    }
}


impl TrainNode {
    /// Construct a leaf node from the given arguments.
    #[inline]
    pub(super) fn leaf(confidence: Confidence<f64>, total_weight: f64)
        -> Self
    {
        TrainNode::Leaf(TrainLeafNode { confidence, total_weight, })
    }


    /// Construct a branch node from the arguments.
    #[inline]
    pub(super) fn branch(
        rule: Splitter,
        left: TrainNode,
        right: TrainNode,
        confidence: Confidence<f64>,
        total_weight: f64,
    ) -> Self
    {
        let leaves = left.leaves() + right.leaves();
        let node = TrainBranchNode {
            rule,
            left: Box::new(left),
            right: Box::new(right),

            confidence,
            total_weight,

            leaves,
        };

        TrainNode::Branch(node)
    }


    /// Returns the number of leaves of this sub-tree.
    #[inline]
    pub(super) fn leaves(&self) -> usize {
        match self {
            TrainNode::Branch(ref node) => node.leaves,
            TrainNode::Leaf(_) => 1_usize
        }
    }


    /// Returns the leaf value if `self` is a leaf.
    #[inline]
    fn leaf_confidence(&self) -> Option<f64> {
        match self {
            TrainNode::Branch(_) => None,
            TrainNode::Leaf(leaf) => Some(leaf.confidence.0),
        }
    }


    /// Collapses, bottom-up, every branch whose two children
    /// are leaves with the same value.
    /// Such a branch outputs the same value for every input.
    #[inline]
    pub(super) fn remove_redundant_nodes(self) -> Self {
        let mut branch = match self {
            TrainNode::Branch(branch) => branch,
            leaf => { return leaf; },
        };

        let left = *branch.left;
        branch.left = Box::new(left.remove_redundant_nodes());
        let right = *branch.right;
        branch.right = Box::new(right.remove_redundant_nodes());

        let l = branch.left.leaf_confidence();
        let r = branch.right.leaf_confidence();
        match (l, r) {
            (Some(l), Some(r)) if l == r => {
                let mut leaf = TrainLeafNode::from(branch);
                leaf.confidence = Confidence::from(l);
                TrainNode::Leaf(leaf)
            },
            _ => {
                branch.leaves = branch.left.leaves() + branch.right.leaves();
                TrainNode::Branch(branch)
            },
        }
    }
}


impl fmt::Debug for TrainBranchNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainBranchNode")
            .field("threshold", &self.rule)
            .field("leaves", &self.leaves)
            .field("p(t)", &self.total_weight)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}


impl fmt::Debug for TrainLeafNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainLeafNode")
            .field("confidence", &self.confidence.0)
            .field("p(t)", &self.total_weight)
            .finish()
    }
}


impl fmt::Debug for TrainNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainNode::Branch(branch) => {
                write!(f, "{:?}", branch)
            },
            TrainNode::Leaf(leaf) => {
                write!(f, "{:?}", leaf)
            },
        }
    }
}
