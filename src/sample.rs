//! Training data and the transform's unit of input/output.
//!
//! - [`Sample`] is one labeled feature vector.
//! - [`TrainingSet`] holds a batch of samples column by column.
//! - [`Template`] is a feature vector plus named scalar fields.
//!   The transform reads training labels from, and writes
//!   predictions to, those fields.

// Provides feature struct.
pub(crate) mod feature_struct;
// Provides sample and training set structs.
pub(crate) mod sample_struct;
// Provides the label mapping.
pub(crate) mod labels;
// Provides the template struct.
pub(crate) mod template;


pub use feature_struct::{Feature, FeatureType};
pub use labels::LabelMap;
pub use sample_struct::{Sample, TrainingSet};
pub use template::Template;
