//! Numeric constants shared across the crate.

/// Lower clamp for weighted errors.
/// Keeps the Discrete AdaBoost coefficient finite.
pub const NUMERIC_TOLERANCE:  f64 = 1e-10;
/// Probabilities behind a half log-odds leaf
/// are clamped to `[LOG_ODDS_CLAMP, 1 - LOG_ODDS_CLAMP]`.
pub const LOG_ODDS_CLAMP:     f64 = 1e-5;
/// Tolerance for `sum(dist) == 1`.
pub const SIMPLEX_TOLERANCE:  f64 = 1e-9;
/// Node impurity below this value is treated as a pure node.
pub const IMPURITY_TOLERANCE: f64 = 1e-12;
/// Absolute bound of the LogitBoost working response.
pub const LOGIT_RESPONSE_MAX: f64 = 4.0;
/// Minimal LogitBoost sample weight `p (1 - p)`.
pub const LOGIT_WEIGHT_MIN:   f64 = 1e-10;

/// Default ensemble size.
pub const DEFAULT_WEAK_COUNT: i32 = 100;
/// Default trimming rate.
pub const DEFAULT_TRIM_RATE:  f64 = 0.95;
/// Default maximal depth of a weak learner.
pub const DEFAULT_MAX_DEPTH:  i32 = 1;
/// Default variable holding the training label.
pub const DEFAULT_INPUT_VARIABLE: &str = "Label";
/// Default seed for fold shuffling.
pub const DEFAULT_SEED:      u64 = 1234;

/// Version of the persisted model layout.
pub const FORMAT_VERSION:    u32 = 1;
