//! Provides [`BoostEngine`], the training loop of the transform.
use crate::{
    Booster,
    BoostError,
    BoostType,
    Classifier,
    Configuration,
    DecisionTreeClassifier,
    Ensemble,
    FeatureType,
    Result,
    TrainingSet,
    WeakLearner,

    booster::{Termination, SampleWeighting},
    common::{utils, checker},
    logging::{RoundStatus, RoundSummary},
};

use std::mem;
use std::ops::ControlFlow;


/// Defines the boosting engine.
/// One variant of AdaBoost is run, as selected by [`BoostType`].
/// Each round,
/// 1. a weak learner is fitted to the trimmed distribution,
/// 2. its weighted error `ε` over all examples is measured
///     under the distribution `∝ exp(-y F(x))`,
/// 3. the learner is appended with the coefficient `α(ε)`,
/// 4. the distribution is updated.
///
/// Boosting stops when `ε ≥ 0.5` (the learner is dropped),
/// when `ε = 0` (the learner is kept),
/// or after the configured number of rounds.
///
/// # Example
/// ```no_run
/// use boostform::prelude::*;
///
/// let samples = vec![
///     Sample::new(vec![0.0], -1.0),
///     Sample::new(vec![1.0],  1.0),
/// ];
/// let set = TrainingSet::from_samples(&samples).unwrap();
/// let config = BoostParams::new()
///     .boost_type(BoostType::Gentle)
///     .weak_count(20)
///     .check()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::from_config(&config).build();
/// let mut booster = BoostEngine::init(&set, &config);
///
/// let f = booster.run(&tree).unwrap();
/// assert_eq!(f.predict_label(&[1.0]), 1.0);
/// ```
pub struct BoostEngine<'a> {
    // Training sample
    sample: &'a TrainingSet,

    // Column types of `sample`, label last.
    feature_types: Vec<FeatureType>,

    boost_type: BoostType,
    weak_count: usize,
    trim_rate: f64,

    // Distribution on sample and the response to fit.
    weighting: SampleWeighting,

    // Accumulated response `F(x_i)` on each training example.
    scores: Vec<f64>,

    ensemble: Ensemble<DecisionTreeClassifier>,

    max_iter: usize,

    // Optional. If this value is `Some(it)`,
    // the algorithm terminates after `it` iterations.
    force_quit_at: Option<usize>,

    termination: Termination,
    last_round: Option<RoundSummary>,
}


impl<'a> BoostEngine<'a> {
    /// Initialize the `BoostEngine`.
    /// This method sets some parameters `BoostEngine` holds.
    pub fn init(sample: &'a TrainingSet, config: &Configuration) -> Self {
        let (n_sample, n_feature) = sample.shape();
        let boost_type = config.boost_type();
        let weak_count = config.weak_count();
        let trim_rate = config.trim_rate();

        let ensemble = Ensemble::new(
            boost_type,
            config.split_criteria(),
            weak_count,
            n_feature,
            sample.labels(),
        );

        Self {
            sample,
            feature_types: sample.feature_types(),
            boost_type,
            weak_count,
            trim_rate,

            weighting: SampleWeighting::uniform(sample.votes(), trim_rate),
            scores: vec![0f64; n_sample],
            ensemble,

            max_iter: weak_count,
            force_quit_at: None,

            termination: Termination::MaxRounds,
            last_round: None,
        }
    }


    /// Set the column types handed to the weak learner.
    /// By default, every feature is numerical.
    pub fn feature_types(mut self, types: Vec<FeatureType>) -> Self {
        self.feature_types = types;
        self
    }


    /// Force quits after `it` iterations.
    /// Reaching `it` is reported as [`Termination::Converged`].
    /// The number of rounds never exceeds the configured weak count.
    pub fn force_quit_at(mut self, it: usize) -> Self {
        self.force_quit_at = Some(it);
        self
    }


    /// Returns the current distribution over the training examples.
    pub fn weights(&self) -> &[f64] {
        self.weighting.weights()
    }


    /// Returns why the last run stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }


    /// Updates the distribution after appending a learner
    /// with `predictions` on the training examples.
    #[inline]
    fn update_params(&mut self, predictions: &[f64], coefficient: f64) {
        let votes = self.sample.votes();
        match self.boost_type {
            BoostType::Logit => {
                self.weighting.assign_logit(votes, &self.scores[..]);
            },
            BoostType::Discrete | BoostType::Real | BoostType::Gentle => {
                self.weighting.update_exponential(
                    votes, predictions, coefficient
                );
            },
        }
    }
}


impl Booster<DecisionTreeClassifier> for BoostEngine<'_> {
    type Output = Result<Ensemble<DecisionTreeClassifier>>;


    fn name(&self) -> &str {
        match self.boost_type {
            BoostType::Discrete => "Discrete AdaBoost",
            BoostType::Real => "Real AdaBoost",
            BoostType::Logit => "LogitBoost",
            BoostType::Gentle => "Gentle AdaBoost",
        }
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let quit = match self.force_quit_at {
            Some(it) => format!("{it}"),
            None => "-".to_string(),
        };
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("Weak count", format!("{}", self.weak_count)),
            ("Trim rate", format!("{}", self.trim_rate)),
            ("Force quit at", quit),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        // Initialize parameters
        let n_sample = self.sample.shape().0;
        self.weighting = SampleWeighting::uniform(
            self.sample.votes(), self.trim_rate
        );
        if self.boost_type == BoostType::Logit {
            // `F = 0` gives the uniform weights and the response `2y`.
            self.weighting.assign_logit(self.sample.votes(), &vec![0f64; n_sample]);
        }
        self.scores = vec![0f64; n_sample];

        self.ensemble = Ensemble::new(
            self.boost_type,
            self.ensemble.split_criteria(),
            self.weak_count,
            self.sample.shape().1,
            self.sample.labels(),
        );

        self.max_iter = match self.force_quit_at {
            Some(it) => it.min(self.weak_count),
            None => self.weak_count,
        };
        self.termination = Termination::MaxRounds;
        self.last_round = None;
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = DecisionTreeClassifier>,
    {
        if self.max_iter < iteration {
            if self.force_quit_at.is_some() {
                self.termination = Termination::Converged;
            }
            return ControlFlow::Break(self.max_iter);
        }


        // Get a new hypothesis
        let h = weak_learner.produce(
            self.sample, &self.feature_types[..], &self.weighting
        );
        let active = self.weighting.active();


        // The error is measured under `exp(-y F)`.
        // Only LogitBoost keeps other weights.
        let predictions = h.confidence_all(self.sample);
        let votes = self.sample.votes();
        let error = match self.boost_type {
            BoostType::Logit => {
                SampleWeighting::exponential_loss(votes, &self.scores[..])
                    .weighted_error(votes, &predictions[..])
            },
            _ => self.weighting.weighted_error(votes, &predictions[..]),
        };


        // Not better than chance. `h` is dropped.
        if error >= 0.5 {
            self.termination = Termination::NoBetterThanChance;
            return ControlFlow::Break(iteration - 1);
        }


        let coefficient = self.boost_type.coefficient(error);
        self.scores.iter_mut()
            .zip(&predictions[..])
            .for_each(|(f, p)| *f += coefficient * p);
        self.ensemble.push(coefficient, h);

        self.last_round = Some(RoundSummary {
            round: iteration,
            weighted_error: error,
            coefficient,
            train_error: utils::zero_one_error(votes, &self.scores[..]),
            active,
        });


        // If `h` classified all the examples correctly,
        // no more rounds are needed.
        if error == 0f64 {
            self.termination = Termination::Converged;
            return ControlFlow::Break(iteration);
        }


        self.update_params(&predictions[..], coefficient);
        debug_assert!(checker::is_distribution(self.weighting.weights()));

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        if self.ensemble.is_empty() {
            return Err(BoostError::EmptyEnsemble);
        }

        let empty = Ensemble::new(
            self.boost_type,
            self.ensemble.split_criteria(),
            self.weak_count,
            self.ensemble.n_features(),
            self.ensemble.labels(),
        );
        let mut ensemble = mem::replace(&mut self.ensemble, empty);
        ensemble.set_termination(self.termination);
        Ok(ensemble)
    }
}


impl RoundStatus for BoostEngine<'_> {
    fn last_round(&self) -> Option<RoundSummary> {
        self.last_round
    }


    fn termination(&self) -> Termination {
        self.termination
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BoostParams,
        DecisionTreeBuilder,
        Sample,
        common::checker::is_distribution,
    };

    fn config(boost_type: BoostType, weak_count: i32) -> Configuration {
        BoostParams::new()
            .boost_type(boost_type)
            .weak_count(weak_count)
            .trim_rate(1.0)
            .check()
            .unwrap()
    }

    // A diagonal boundary with every ninth label flipped.
    fn diagonal() -> TrainingSet {
        let samples = (0..60)
            .map(|i| {
                let a = ((i * 37) % 60) as f64 / 60.0;
                let b = ((i * 23 + 7) % 61) as f64 / 61.0;
                let mut y = if a + b > 1.0 { 1.0 } else { -1.0 };
                if i % 9 == 4 { y = -y; }
                Sample::new(vec![a, b], y)
            })
            .collect::<Vec<_>>();
        TrainingSet::from_samples(&samples).unwrap()
    }

    fn training_errors(f: &Ensemble<DecisionTreeClassifier>, set: &TrainingSet)
        -> usize
    {
        (0..set.shape().0)
            .filter(|&i| {
                let (x, y) = set.at(i);
                f.predict_label(&x) != y
            })
            .count()
    }

    fn interval() -> TrainingSet {
        // `+1` inside [2, 5], `-1` outside: no single stump separates it.
        let samples = (0..8)
            .map(|i| {
                let y = if (2..=5).contains(&i) { 1.0 } else { -1.0 };
                Sample::new(vec![i as f64], y)
            })
            .collect::<Vec<_>>();
        TrainingSet::from_samples(&samples).unwrap()
    }

    #[test]
    fn separable_data_converges_in_one_round() {
        let samples = vec![
            Sample::new(vec![0.0, 0.0], -1.0),
            Sample::new(vec![1.0, 1.0], 1.0),
        ];
        let set = TrainingSet::from_samples(&samples).unwrap();
        for boost_type in [
            BoostType::Discrete, BoostType::Real,
            BoostType::Logit, BoostType::Gentle,
        ] {
            let config = config(boost_type, 10);
            let tree = DecisionTreeBuilder::from_config(&config).build();
            let f = BoostEngine::init(&set, &config).run(&tree).unwrap();
            assert_eq!(f.len(), 1, "{boost_type}");
            assert_eq!(f.termination(), Termination::Converged);
        }
    }

    #[test]
    fn weights_stay_a_distribution() {
        let set = interval();
        for boost_type in [
            BoostType::Discrete, BoostType::Real,
            BoostType::Logit, BoostType::Gentle,
        ] {
            let config = config(boost_type, 5);
            let tree = DecisionTreeBuilder::from_config(&config).build();
            let mut engine = BoostEngine::init(&set, &config);
            engine.preprocess();
            for it in 1..=5 {
                if engine.boost(&tree, it).is_break() { break; }
                assert!(is_distribution(engine.weights()), "{boost_type}");
            }
        }
    }

    #[test]
    fn discrete_fits_the_interval() {
        let set = interval();
        let config = config(BoostType::Discrete, 20);
        let tree = DecisionTreeBuilder::from_config(&config).build();
        let f = BoostEngine::init(&set, &config).run(&tree).unwrap();

        assert!(f.len() <= 20);
        for i in 0..8 {
            let (x, y) = set.at(i);
            assert_eq!(f.predict_label(&x), y, "example {i}");
        }
        assert!(f.coefficients().iter().all(|a| *a > 0.0));
    }

    #[test]
    fn force_quit_is_reported_as_converged() {
        let set = interval();
        let config = config(BoostType::Gentle, 10);
        let tree = DecisionTreeBuilder::from_config(&config).build();
        let f = BoostEngine::init(&set, &config)
            .force_quit_at(2)
            .run(&tree)
            .unwrap();
        assert_eq!(f.len(), 2);
        assert_eq!(f.termination(), Termination::Converged);
    }

    #[test]
    fn chance_level_first_round_gives_empty_ensemble() {
        let samples = vec![
            Sample::new(vec![1.0], -1.0),
            Sample::new(vec![1.0], 1.0),
        ];
        let set = TrainingSet::from_samples(&samples).unwrap();
        let config = config(BoostType::Discrete, 10);
        let tree = DecisionTreeBuilder::from_config(&config).build();
        let mut engine = BoostEngine::init(&set, &config);
        let err = engine.run(&tree).unwrap_err();
        assert!(matches!(err, BoostError::EmptyEnsemble));
        assert_eq!(engine.termination(), Termination::NoBetterThanChance);
    }

    #[test]
    fn trimmed_boosting_beats_a_single_stump() {
        let set = diagonal();
        for boost_type in [BoostType::Discrete, BoostType::Real] {
            let config = BoostParams::new()
                .boost_type(boost_type)
                .check()
                .unwrap();
            let tree = DecisionTreeBuilder::from_config(&config).build();
            let f = BoostEngine::init(&set, &config).run(&tree).unwrap();
            let stump = BoostEngine::init(&set, &config)
                .force_quit_at(1)
                .run(&tree)
                .unwrap();

            let boosted = training_errors(&f, &set);
            let single = training_errors(&stump, &set);
            assert_eq!(f.len(), 100, "{boost_type}");
            assert!(2 * boosted < single, "{boost_type}: {boosted} vs {single}");
        }
    }

    #[test]
    fn logit_keeps_boosting_on_noisy_data() {
        let set = diagonal();
        let config = BoostParams::new()
            .boost_type(BoostType::Logit)
            .check()
            .unwrap();
        let tree = DecisionTreeBuilder::from_config(&config).build();
        let f = BoostEngine::init(&set, &config).run(&tree).unwrap();
        let stump = BoostEngine::init(&set, &config)
            .force_quit_at(1)
            .run(&tree)
            .unwrap();

        assert!(f.len() >= 4, "{} rounds", f.len());
        assert!(training_errors(&f, &set) < training_errors(&stump, &set));
    }
}
