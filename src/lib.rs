#![warn(missing_docs)]

//!
//! A crate that provides a trainable classification transform
//! based on the AdaBoost family of boosting algorithms.
//!
//! The transform fits an ensemble of shallow decision trees
//! (decision stumps by default) over labeled feature vectors,
//! and projects a feature vector to either a class label
//! or a normalized confidence.
//!
//! Four boosting variants are supported,
//! following Friedman, Hastie, and Tibshirani (2000),
//! [Additive logistic regression: a statistical view of boosting](https://doi.org/10.1214/aos/1016218223).
//!
//! - `Discrete` AdaBoost
//!     Each weak learner votes `+1` or `-1`,
//!     the vote is weighted by `½ ln((1 - ε) / ε)`.
//! - `Real` AdaBoost
//!     Each leaf outputs half the log-odds of its weighted class mass.
//! - `Logit` Boost
//!     Newton steps on the logistic loss.
//! - `Gentle` AdaBoost
//!     Each leaf outputs the weighted least-squares fit of the label.
//!
//! # Example
//! ```no_run
//! use boostform::prelude::*;
//!
//! let templates = vec![
//!     Template::new(vec![0.1, 0.2]).with_field("Label", 1.0),
//!     Template::new(vec![0.9, 0.8]).with_field("Label", -1.0),
//! ];
//!
//! let config = BoostParams::new()
//!     .boost_type(BoostType::Discrete)
//!     .weak_count(5)
//!     .return_confidence(false)
//!     .check()
//!     .unwrap();
//!
//! let mut transform = ClassificationTransform::new(config);
//! transform.train(&templates).unwrap();
//!
//! let label = transform.predict(&[0.1, 0.2]).unwrap();
//! assert_eq!(label, 1.0);
//! ```

pub mod constants;
pub mod error;
pub mod config;
pub mod sample;
pub mod common;
pub mod weak_learner;
pub mod hypothesis;
pub mod booster;
pub mod logging;
pub mod persist;
pub mod transform;

pub mod prelude;


pub use error::{BoostError, ErrorKind, Result};

pub use config::{
    BoostParams,
    BoostType,
    Configuration,
    SplitCriteria,
};

pub use sample::{
    Feature,
    FeatureType,
    LabelMap,
    Sample,
    Template,
    TrainingSet,
};

pub use weak_learner::{
    WeakLearner,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafValue,
};

pub use hypothesis::{
    Classifier,
    Ensemble,
};

pub use booster::{
    Booster,
    BoostEngine,
    CrossValidation,
    SampleWeighting,
    Termination,
};

pub use logging::{
    Logger,
    RoundStatus,
    RoundSummary,
};

pub use transform::ClassificationTransform;
