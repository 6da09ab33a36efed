use crate::{Configuration, DecisionTree, SplitCriteria};
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::weak_learner::common::type_and_struct::*;
use super::criterion::LeafValue;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use boostform::prelude::*;
///
/// let weak_learner = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .criterion(SplitCriteria::Gini)
///     .leaf_value(LeafValue::LogOdds)
///     .build();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeBuilder {
    max_depth: Depth,
    criterion: SplitCriteria,
    leaf: LeafValue,
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: 1,
    /// criterion: SplitCriteria::Gini,
    /// leaf_value: LeafValue::LogOdds,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: Depth::from(DEFAULT_MAX_DEPTH as usize),
            criterion: SplitCriteria::Gini,
            leaf: LeafValue::LogOdds,
        }
    }


    /// Construct a builder from the validated options
    /// of the transform.
    /// `SplitCriteria::Default` is resolved for the boosting variant.
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            max_depth: Depth::from(config.max_depth()),
            criterion: config.resolved_criteria(),
            leaf: config.boost_type().leaf_value(),
        }
    }


    /// Specify the maximal depth of the tree.
    /// A depth of `0` is raised to `1`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth.max(1));
        self
    }


    /// Set the node splitting rule.
    /// `SplitCriteria::Default` is scored as `SplitCriteria::Sqerr`.
    #[inline]
    pub fn criterion(mut self, criterion: SplitCriteria) -> Self {
        self.criterion = criterion;
        self
    }


    /// Set the rule that assigns a value to each leaf.
    #[inline]
    pub fn leaf_value(mut self, leaf: LeafValue) -> Self {
        self.leaf = leaf;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(
            self.criterion, self.leaf, self.max_depth
        )
    }
}
