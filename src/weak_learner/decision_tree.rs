//! Defines the decision tree weak learner.
//!
//! A tree of bounded depth is grown over numeric features.
//! [`DecisionTreeBuilder`] sets the parameters,
//! [`DecisionTree`] grows a tree in each boosting round,
//! and [`DecisionTreeClassifier`] is the tree it returns.
mod builder;
mod criterion;
mod train_node;
mod node;
mod decision_tree_algorithm;
mod decision_tree_classifier;


pub use builder::DecisionTreeBuilder;
pub use criterion::LeafValue;
pub use decision_tree_algorithm::DecisionTree;
pub use decision_tree_classifier::DecisionTreeClassifier;
