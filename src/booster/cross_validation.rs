//! Cross-validated early stopping.
use rand::prelude::*;
use colored::Colorize;

use crate::{
    Booster,
    BoostEngine,
    Configuration,
    DecisionTreeClassifier,
    Ensemble,
    TrainingSet,
    WeakLearner,
    common::utils,
};

use std::iter::Iterator;

const WIDTH: usize = 9;


/// A struct that generates
/// pairs of training/held-out sets for cross validation.
///
/// The examples are split into `n_folds` contiguous folds
/// of the (optionally shuffled) index order.
/// The `k`-th pair holds out the `k`-th fold.
/// Both sets keep the label mapping of the whole set.
///
/// # Example
/// ```no_run
/// use boostform::prelude::*;
///
/// let samples = (0..10)
///     .map(|i| Sample::new(vec![i as f64], (i % 2) as f64))
///     .collect::<Vec<_>>();
/// let set = TrainingSet::from_samples(&samples).unwrap();
///
/// let cv = CrossValidation::new(&set)
///     .n_folds(5)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     assert_eq!(train.shape().0, 8);
///     assert_eq!(test.shape().0, 2);
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a TrainingSet,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a TrainingSet) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// The number is capped by the number of examples.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds.min(self.ix.len());
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the number of folds this iterator yields.
    #[inline]
    pub fn folds(&self) -> usize {
        self.n_folds
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (TrainingSet, TrainingSet) {
        let n_sample = self.ix.len();
        let start = i * n_sample / self.n_folds;
        let end = (i + 1) * n_sample / self.n_folds;

        let test = &self.ix[start..end];
        let train = self.ix[..start].iter()
            .chain(&self.ix[end..])
            .copied()
            .collect::<Vec<_>>();
        (self.sample.subset(&train), self.sample.subset(test))
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (TrainingSet, TrainingSet);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}


/// Returns the number of rounds that minimizes
/// the mean held-out error over `config.folds()` folds,
/// or `None` if cross-validation does not apply.
///
/// For each fold, an ensemble is boosted on the other folds
/// and its held-out 0/1 error after every round is recorded.
/// A fold that stopped early keeps its last error
/// for the remaining rounds.
/// Folds whose boosting fails are skipped.
/// Ties are broken toward fewer rounds.
pub fn best_round<W>(
    sample: &TrainingSet,
    config: &Configuration,
    weak_learner: &W,
) -> Option<usize>
    where W: WeakLearner<Hypothesis = DecisionTreeClassifier>
{
    let cv = CrossValidation::new(sample)
        .n_folds(config.folds())
        .seed(config.seed())
        .verbose(config.print_every() != usize::MAX)
        .shuffle();
    if cv.folds() < 2 { return None; }

    let weak_count = config.weak_count();
    let curves = cv.filter_map(|(train, test)| {
            let f = BoostEngine::init(&train, config)
                .run(weak_learner)
                .ok()?;
            Some(held_out_curve(&f, &test, weak_count))
        })
        .collect::<Vec<_>>();
    if curves.is_empty() { return None; }

    let n_curves = curves.len() as f64;
    let mean = (0..weak_count)
        .map(|t| curves.iter().map(|c| c[t]).sum::<f64>() / n_curves)
        .collect::<Vec<_>>();

    let mut best = 0;
    for (t, err) in mean.iter().enumerate() {
        if *err < mean[best] { best = t; }
    }
    Some(best + 1)
}


/// The 0/1 error on `test` after each of `rounds` rounds.
fn held_out_curve(
    f: &Ensemble<DecisionTreeClassifier>,
    test: &TrainingSet,
    rounds: usize,
) -> Vec<f64>
{
    let n_test = test.shape().0;
    let staged = (0..n_test)
        .map(|i| f.staged_decision_values(&test.instance(i)))
        .collect::<Vec<_>>();

    let mut curve = Vec::with_capacity(rounds);
    for t in 0..f.len().min(rounds) {
        let scores = staged.iter()
            .map(|s| s[t])
            .collect::<Vec<_>>();
        curve.push(utils::zero_one_error(test.votes(), &scores[..]));
    }

    let last = curve.last().copied().unwrap_or(1f64);
    curve.resize(rounds, last);
    curve
}
