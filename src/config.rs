//! Options of the classification transform.
//!
//! [`BoostParams`] collects unchecked option values.
//! [`BoostParams::check`] validates them once and returns
//! an immutable [`Configuration`].
use serde::{Serialize, Deserialize};

use crate::constants::*;
use crate::error::{BoostError, Result};
use crate::weak_learner::LeafValue;

use std::fmt;
use std::str::FromStr;


/// The boosting variant.
/// Selects the vote type of the weak learners,
/// the coefficient formula, and the re-weighting law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoostType {
    /// Discrete AdaBoost. Weak learners vote `+1` or `-1`.
    Discrete,
    /// Real AdaBoost. Weak learners output half log-odds.
    Real,
    /// LogitBoost. Weak learners fit the working response.
    Logit,
    /// Gentle AdaBoost. Weak learners fit the label by least squares.
    Gentle,
}


impl Default for BoostType {
    fn default() -> Self {
        Self::Real
    }
}


impl BoostType {
    /// Returns the coefficient `α` on a weak learner
    /// whose weighted error is `error`.
    ///
    /// Only `Discrete` depends on the error.
    /// The other variants put the magnitude into the leaf values.
    #[inline]
    pub fn coefficient(&self, error: f64) -> f64 {
        match self {
            Self::Discrete => {
                let e = error.clamp(NUMERIC_TOLERANCE, 1f64 - NUMERIC_TOLERANCE);
                0.5 * ((1f64 - e) / e).ln()
            },
            Self::Real | Self::Gentle => 1f64,
            Self::Logit => 0.5,
        }
    }


    /// Returns the split criterion `SplitCriteria::Default` stands for.
    #[inline]
    pub fn default_criteria(&self) -> SplitCriteria {
        match self {
            Self::Discrete => SplitCriteria::Misclass,
            Self::Real => SplitCriteria::Gini,
            Self::Logit | Self::Gentle => SplitCriteria::Sqerr,
        }
    }


    /// Returns the rule that assigns a value to a leaf.
    #[inline]
    pub fn leaf_value(&self) -> LeafValue {
        match self {
            Self::Discrete => LeafValue::Vote,
            Self::Real => LeafValue::LogOdds,
            Self::Logit | Self::Gentle => LeafValue::Mean,
        }
    }


    /// Returns `true` if weak learners are regression trees.
    #[inline]
    pub fn fits_regression(&self) -> bool {
        matches!(self, Self::Logit | Self::Gentle)
    }
}


impl fmt::Display for BoostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Discrete => "Discrete",
            Self::Real => "Real",
            Self::Logit => "Logit",
            Self::Gentle => "Gentle",
        };
        write!(f, "{name}")
    }
}


impl FromStr for BoostType {
    type Err = BoostError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discrete" => Ok(Self::Discrete),
            "real" => Ok(Self::Real),
            "logit" => Ok(Self::Logit),
            "gentle" => Ok(Self::Gentle),
            _ => Err(BoostError::InvalidConfiguration(
                format!("unknown boost type `{s}`")
            )),
        }
    }
}


/// Criterion used to score candidate splits while growing a weak learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitCriteria {
    /// The default of the boosting variant.
    /// See [`BoostType::default_criteria`].
    Default,
    /// Gini impurity.
    Gini,
    /// Weighted misclassification rate.
    Misclass,
    /// Weighted squared error.
    Sqerr,
}


impl Default for SplitCriteria {
    fn default() -> Self {
        Self::Default
    }
}


impl SplitCriteria {
    /// Resolves `Default` for the given boosting variant.
    /// Regression-fitted variants (`Logit`, `Gentle`)
    /// always use `Sqerr`.
    #[inline]
    pub fn resolve(self, boost_type: BoostType) -> Self {
        if boost_type.fits_regression() {
            return Self::Sqerr;
        }
        match self {
            Self::Default => boost_type.default_criteria(),
            criteria => criteria,
        }
    }
}


impl fmt::Display for SplitCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "Default",
            Self::Gini => "Gini index",
            Self::Misclass => "Misclassification rate",
            Self::Sqerr => "Squared error",
        };
        write!(f, "{name}")
    }
}


impl FromStr for SplitCriteria {
    type Err = BoostError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "gini" => Ok(Self::Gini),
            "misclass" => Ok(Self::Misclass),
            "sqerr" => Ok(Self::Sqerr),
            _ => Err(BoostError::InvalidConfiguration(
                format!("unknown split criteria `{s}`")
            )),
        }
    }
}


/// Unchecked options of [`ClassificationTransform`].
///
/// By default, `BoostParams` sets the options as follows;
/// ```text
/// boost_type:        BoostType::Real,
/// split_criteria:    SplitCriteria::Default,
/// weak_count:        100,
/// trim_rate:         0.95,
/// folds:             0,
/// max_depth:         1,
/// return_confidence: true,
/// overwrite_mat:     true,
/// input_variable:    "Label",
/// output_variable:   "",
/// seed:              1234,
/// print_every:       usize::MAX,
/// ```
///
/// [`ClassificationTransform`]: crate::ClassificationTransform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostParams {
    boost_type: BoostType,
    split_criteria: SplitCriteria,
    weak_count: i32,
    trim_rate: f64,
    folds: i32,
    max_depth: i32,
    return_confidence: bool,
    overwrite_mat: bool,
    input_variable: String,
    output_variable: String,
    seed: u64,
    print_every: usize,
}


impl Default for BoostParams {
    fn default() -> Self {
        Self::new()
    }
}


impl BoostParams {
    /// Construct a new instance with the default options.
    pub fn new() -> Self {
        Self {
            boost_type: BoostType::default(),
            split_criteria: SplitCriteria::default(),
            weak_count: DEFAULT_WEAK_COUNT,
            trim_rate: DEFAULT_TRIM_RATE,
            folds: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            return_confidence: true,
            overwrite_mat: true,
            input_variable: DEFAULT_INPUT_VARIABLE.to_string(),
            output_variable: String::new(),
            seed: DEFAULT_SEED,
            print_every: usize::MAX,
        }
    }


    /// Set the boosting variant.
    pub fn boost_type(mut self, boost_type: BoostType) -> Self {
        self.boost_type = boost_type;
        self
    }


    /// Set the split criterion of the weak learners.
    pub fn split_criteria(mut self, split_criteria: SplitCriteria) -> Self {
        self.split_criteria = split_criteria;
        self
    }


    /// Set the maximal number of weak learners.
    pub fn weak_count(mut self, weak_count: i32) -> Self {
        self.weak_count = weak_count;
        self
    }


    /// Set the fraction of weight mass
    /// used by the weak-learner search each round.
    pub fn trim_rate(mut self, trim_rate: f64) -> Self {
        self.trim_rate = trim_rate;
        self
    }


    /// Set the number of cross-validation folds for early stopping.
    /// `0` disables cross-validation.
    pub fn folds(mut self, folds: i32) -> Self {
        self.folds = folds;
        self
    }


    /// Set the maximal depth of each weak learner.
    pub fn max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }


    /// If `true`, prediction returns the normalized confidence,
    /// otherwise the class label.
    pub fn return_confidence(mut self, flag: bool) -> Self {
        self.return_confidence = flag;
        self
    }


    /// If `true`, projection replaces the template data by the response,
    /// otherwise the response is written to `output_variable`.
    pub fn overwrite_mat(mut self, flag: bool) -> Self {
        self.overwrite_mat = flag;
        self
    }


    /// Set the variable holding the training label.
    pub fn input_variable<S: ToString>(mut self, name: S) -> Self {
        self.input_variable = name.to_string();
        self
    }


    /// Set the variable receiving the response.
    /// An empty name falls back to `input_variable`.
    pub fn output_variable<S: ToString>(mut self, name: S) -> Self {
        self.output_variable = name.to_string();
        self
    }


    /// Set the seed for shuffling the cross-validation folds.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Print the training progress every `round` rounds.
    /// `usize::MAX` disables printing.
    pub fn print_every(mut self, round: usize) -> Self {
        self.print_every = round;
        self
    }


    /// Checks the options.
    pub fn verify(&self) -> Result<()> {
        if self.weak_count <= 0 {
            return Err(BoostError::InvalidConfiguration(format!(
                "weak_count must be positive, got {}", self.weak_count
            )));
        }
        if !(self.trim_rate > 0f64 && self.trim_rate <= 1f64) {
            return Err(BoostError::InvalidConfiguration(format!(
                "trim_rate must be in (0, 1], got {}", self.trim_rate
            )));
        }
        if self.max_depth < 1 {
            return Err(BoostError::InvalidConfiguration(format!(
                "max_depth must be at least 1, got {}", self.max_depth
            )));
        }
        if self.folds < 0 {
            return Err(BoostError::InvalidConfiguration(format!(
                "folds must be non-negative, got {}", self.folds
            )));
        }
        if self.print_every == 0 {
            return Err(BoostError::InvalidConfiguration(
                "print_every must be positive".into()
            ));
        }
        Ok(())
    }


    /// Checks the options and returns the validated [`Configuration`].
    pub fn check(self) -> Result<Configuration> {
        self.verify()?;

        let output_variable = if self.output_variable.is_empty() {
            self.input_variable.clone()
        } else {
            self.output_variable
        };

        let config = Configuration {
            boost_type: self.boost_type,
            split_criteria: self.split_criteria,
            weak_count: self.weak_count as usize,
            trim_rate: self.trim_rate,
            folds: self.folds as usize,
            max_depth: self.max_depth as usize,
            return_confidence: self.return_confidence,
            overwrite_mat: self.overwrite_mat,
            input_variable: self.input_variable,
            output_variable,
            seed: self.seed,
            print_every: self.print_every,
        };
        Ok(config)
    }
}


/// Validated, immutable options of [`ClassificationTransform`].
/// Obtained by [`BoostParams::check`].
///
/// [`ClassificationTransform`]: crate::ClassificationTransform
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    boost_type: BoostType,
    split_criteria: SplitCriteria,
    weak_count: usize,
    trim_rate: f64,
    folds: usize,
    max_depth: usize,
    return_confidence: bool,
    overwrite_mat: bool,
    input_variable: String,
    output_variable: String,
    seed: u64,
    print_every: usize,
}


impl Default for Configuration {
    fn default() -> Self {
        Self {
            boost_type: BoostType::default(),
            split_criteria: SplitCriteria::default(),
            weak_count: DEFAULT_WEAK_COUNT as usize,
            trim_rate: DEFAULT_TRIM_RATE,
            folds: 0,
            max_depth: DEFAULT_MAX_DEPTH as usize,
            return_confidence: true,
            overwrite_mat: true,
            input_variable: DEFAULT_INPUT_VARIABLE.to_string(),
            output_variable: DEFAULT_INPUT_VARIABLE.to_string(),
            seed: DEFAULT_SEED,
            print_every: usize::MAX,
        }
    }
}


impl Configuration {
    /// Boosting variant.
    pub fn boost_type(&self) -> BoostType { self.boost_type }
    /// Split criterion as configured (possibly `Default`).
    pub fn split_criteria(&self) -> SplitCriteria { self.split_criteria }
    /// Split criterion after resolving `Default`.
    pub fn resolved_criteria(&self) -> SplitCriteria {
        self.split_criteria.resolve(self.boost_type)
    }
    /// Maximal number of weak learners.
    pub fn weak_count(&self) -> usize { self.weak_count }
    /// Fraction of weight mass kept for the weak-learner search.
    pub fn trim_rate(&self) -> f64 { self.trim_rate }
    /// Number of cross-validation folds.
    pub fn folds(&self) -> usize { self.folds }
    /// Maximal depth of a weak learner.
    pub fn max_depth(&self) -> usize { self.max_depth }
    /// Whether prediction returns the normalized confidence.
    pub fn return_confidence(&self) -> bool { self.return_confidence }
    /// Whether projection overwrites the template data.
    pub fn overwrite_mat(&self) -> bool { self.overwrite_mat }
    /// Variable holding the training label.
    pub fn input_variable(&self) -> &str { &self.input_variable }
    /// Variable receiving the response.
    pub fn output_variable(&self) -> &str { &self.output_variable }
    /// Seed for fold shuffling.
    pub fn seed(&self) -> u64 { self.seed }
    /// Interval of progress printing.
    pub fn print_every(&self) -> usize { self.print_every }
}
