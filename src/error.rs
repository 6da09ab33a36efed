//! Error types of this crate.
//!

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoostError>;


/// Every failure the transform reports to its caller.
#[derive(Error, Debug)]
pub enum BoostError {
    /// An option is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `train` received no samples.
    #[error("the training set is empty")]
    EmptyTrainingSet,

    /// A feature vector does not have the dimensionality
    /// used at training time.
    #[error("dimension mismatch: expected {expected} features, got {found}")]
    DimensionMismatch {
        /// Dimensionality fixed by the training set.
        expected: usize,
        /// Dimensionality of the offending vector.
        found: usize,
    },

    /// A training template does not carry the label variable.
    #[error("the variable `{0}` holding the label is missing")]
    MissingLabel(String),

    /// The labels take more than two distinct values.
    #[error("boosting supports two classes, got {0} distinct labels")]
    UnsupportedLabels(usize),

    /// A feature value or a label is `NaN` or infinite.
    #[error("the training set contains a non-finite value")]
    NonFiniteValue,

    /// The input data could not be converted to a training set.
    #[error("invalid input data: {0}")]
    InvalidInput(String),

    /// Prediction was requested before training or loading a model.
    #[error("the model is not trained")]
    UntrainedModel,

    /// The first boosting round was no better than chance.
    #[error("boosting produced no weak learner better than chance")]
    EmptyEnsemble,

    /// The serialized model is malformed or has an unsupported version.
    #[error("corrupt model: {0}")]
    CorruptModel(String),

    /// The model could not be encoded.
    #[error("failed to encode the model: {0}")]
    Encode(String),

    /// The underlying stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}


/// Coarse classification of [`BoostError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad option values, rejected at configuration time.
    Configuration,
    /// Empty training set, dimension mismatch, bad labels.
    Data,
    /// Prediction before training, or training without a result.
    ModelState,
    /// Corrupt or incompatible serialized model, stream failures.
    Persistence,
}


impl BoostError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration(_) => ErrorKind::Configuration,

            Self::EmptyTrainingSet
            | Self::DimensionMismatch { .. }
            | Self::MissingLabel(_)
            | Self::UnsupportedLabels(_)
            | Self::NonFiniteValue
            | Self::InvalidInput(_) => ErrorKind::Data,

            Self::UntrainedModel
            | Self::EmptyEnsemble => ErrorKind::ModelState,

            Self::CorruptModel(_)
            | Self::Encode(_)
            | Self::Io(_) => ErrorKind::Persistence,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let err = BoostError::InvalidConfiguration("weak_count".into());
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = BoostError::DimensionMismatch { expected: 2, found: 3 };
        assert_eq!(err.kind(), ErrorKind::Data);
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 2 features, got 3"
        );

        assert_eq!(BoostError::UntrainedModel.kind(), ErrorKind::ModelState);
        assert_eq!(BoostError::EmptyEnsemble.kind(), ErrorKind::ModelState);

        let err = BoostError::CorruptModel("eof".into());
        assert_eq!(err.kind(), ErrorKind::Persistence);
    }
}
