//! Types shared by the tree-based weak learners.

pub(crate) mod type_and_struct;
pub(crate) mod split_rule;
