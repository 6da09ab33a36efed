//! Exports the transform, the boosting engine, and their traits.
//!
pub use crate::transform::ClassificationTransform;


pub use crate::config::{
    BoostParams,
    BoostType,
    Configuration,
    SplitCriteria,
};


pub use crate::booster::{
    // Booster trait
    Booster,

    BoostEngine,
    CrossValidation,
    SampleWeighting,
    Termination,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafValue,
};


pub use crate::hypothesis::{
    Classifier,
    Ensemble,
};


pub use crate::sample::{
    Feature,
    FeatureType,
    LabelMap,
    Sample,
    Template,
    TrainingSet,
};


pub use crate::logging::{
    Logger,
    RoundStatus,
    RoundSummary,
};


pub use crate::error::{
    BoostError,
    ErrorKind,
};
