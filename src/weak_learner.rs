//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and the decision tree weak learner.

/// Provides WeakLearner trait.
pub mod core;

pub(crate) mod common;

/// Defines Decision Tree.
pub mod decision_tree;


pub use self::core::WeakLearner;

pub use self::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafValue,
};

pub(crate) use common::type_and_struct;
