//! Defines `BoostEngine`, the AdaBoost family of boosting algorithms.
//! The variants follow
//! [Additive logistic regression: a statistical view of boosting](https://doi.org/10.1214/aos/1016218223)
//! by Jerome Friedman, Trevor Hastie, and Robert Tibshirani.
mod adaboost_algorithm;

pub use adaboost_algorithm::BoostEngine;
