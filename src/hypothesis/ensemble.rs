use serde::{Serialize, Deserialize};
use crate::{
    common::utils,
    booster::Termination,
    BoostError,
    BoostType,
    Classifier,
    DecisionTreeClassifier,
    LabelMap,
    Result,
    SplitCriteria,
};


/// The trained artifact the boosting engine returns.
/// An ordered list of weak learners, each with its coefficient,
/// together with the options they were trained under.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ensemble<H> {
    boost_type: BoostType,
    split_criteria: SplitCriteria,
    weak_count: usize,
    n_features: usize,
    labels: LabelMap,
    coefficients: Vec<f64>,
    learners: Vec<H>,
    termination: Termination,
}


impl<H> Ensemble<H> {
    /// Construct an empty ensemble.
    #[inline]
    pub(crate) fn new(
        boost_type: BoostType,
        split_criteria: SplitCriteria,
        weak_count: usize,
        n_features: usize,
        labels: LabelMap,
    ) -> Self
    {
        Self {
            boost_type,
            split_criteria,
            weak_count,
            n_features,
            labels,
            coefficients: Vec::new(),
            learners: Vec::new(),
            termination: Termination::MaxRounds,
        }
    }


    /// Append a pair `(coefficient, h)` to the ensemble.
    #[inline]
    pub(crate) fn push(&mut self, coefficient: f64, hypothesis: H) {
        self.coefficients.push(coefficient);
        self.learners.push(hypothesis);
    }


    #[inline]
    pub(crate) fn set_termination(&mut self, termination: Termination) {
        self.termination = termination;
    }


    /// Returns the number of trained weak learners.
    pub fn len(&self) -> usize {
        self.learners.len()
    }


    /// Returns `true` if no weak learner has been trained.
    pub fn is_empty(&self) -> bool {
        self.learners.is_empty()
    }


    /// Boosting variant the ensemble was trained with.
    pub fn boost_type(&self) -> BoostType {
        self.boost_type
    }


    /// Split criterion the ensemble was trained with.
    pub fn split_criteria(&self) -> SplitCriteria {
        self.split_criteria
    }


    /// The configured number of weak learners.
    /// This may exceed [`Ensemble::len`] if boosting stopped early.
    pub fn weak_count(&self) -> usize {
        self.weak_count
    }


    /// Dimensionality of the feature vectors.
    pub fn n_features(&self) -> usize {
        self.n_features
    }


    /// Mapping between the votes `±1` and the training labels.
    pub fn labels(&self) -> LabelMap {
        self.labels
    }


    /// The coefficients, one per weak learner.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients[..]
    }


    /// The weak learners in training order.
    pub fn learners(&self) -> &[H] {
        &self.learners[..]
    }


    /// Why boosting stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }
}


impl<H: Classifier> Ensemble<H> {
    /// Returns the raw ensemble response `Σ α_t h_t(x)`.
    ///
    /// # Panics
    /// Panics if `x` has fewer than `n_features()` entries.
    #[inline]
    pub fn decision_value(&self, x: &[f64]) -> f64 {
        self.coefficients.iter()
            .zip(&self.learners[..])
            .map(|(a, h)| *a * h.confidence(x))
            .sum::<f64>()
    }


    /// Returns the response after each weak learner,
    /// `[Σ_{t ≤ 1}, Σ_{t ≤ 2}, ...]`.
    ///
    /// # Panics
    /// Panics if `x` has fewer than `n_features()` entries.
    pub fn staged_decision_values(&self, x: &[f64]) -> Vec<f64> {
        self.coefficients.iter()
            .zip(&self.learners[..])
            .scan(0f64, |acc, (a, h)| {
                *acc += *a * h.confidence(x);
                Some(*acc)
            })
            .collect()
    }


    /// Returns the training label predicted for `x`.
    ///
    /// # Panics
    /// Panics if `x` has fewer than `n_features()` entries.
    #[inline]
    pub fn predict_label(&self, x: &[f64]) -> f64 {
        self.labels.to_label(self.decision_value(x))
    }


    /// Returns the estimated probability of the positive label,
    /// `1 / (1 + exp(-2F(x)))`.
    /// This is the probability LogitBoost fits.
    ///
    /// # Panics
    /// Panics if `x` has fewer than `n_features()` entries.
    #[inline]
    pub fn probability(&self, x: &[f64]) -> f64 {
        utils::logistic(2f64 * self.decision_value(x))
    }
}


impl<H: Classifier> Classifier for Ensemble<H> {
    /// The response divided by the configured number of weak learners.
    /// Panics like [`Ensemble::decision_value`].
    fn confidence(&self, x: &[f64]) -> f64 {
        self.decision_value(x) / self.weak_count as f64
    }
}


impl Ensemble<DecisionTreeClassifier> {
    /// Checks the structural invariants of a decoded ensemble.
    pub(crate) fn validate(&self) -> Result<()> {
        let corrupt = |msg: &str| Err(BoostError::CorruptModel(msg.into()));

        if self.weak_count == 0 {
            return corrupt("weak_count must be positive");
        }
        if self.learners.is_empty() {
            return corrupt("the ensemble has no weak learner");
        }
        if self.coefficients.len() != self.learners.len() {
            return corrupt("the number of coefficients and learners differ");
        }
        if self.coefficients.iter().any(|a| !a.is_finite()) {
            return corrupt("a coefficient is not finite");
        }
        if !self.labels.negative().is_finite()
            || !self.labels.positive().is_finite()
        {
            return corrupt("a label is not finite");
        }
        let valid = self.learners.iter()
            .all(|h| h.is_valid_for(self.n_features));
        if !valid {
            return corrupt("a weak learner is inconsistent with n_features");
        }
        Ok(())
    }
}
