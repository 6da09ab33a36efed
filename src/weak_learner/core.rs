//! Provides `WeakLearner` trait.
use crate::{FeatureType, SampleWeighting, TrainingSet};


/// An interface that returns a hypothesis
/// for the given distribution over training examples.
pub trait WeakLearner {
    /// Returned hypothesis.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis fitted to `weighting.response()`
    /// under the distribution `weighting.weights()` over `sample`.
    ///
    /// `types` tags every column of `sample` followed by the label;
    /// only `FeatureType::Numerical` columns may be split on.
    /// The response is the vote `±1` for classification-fitted boosting
    /// and the working response for LogitBoost.
    /// The structure is searched on `weighting.trimmed()` only.
    fn produce(
        &self,
        sample: &TrainingSet,
        types: &[FeatureType],
        weighting: &SampleWeighting,
    ) -> Self::Hypothesis;
}
