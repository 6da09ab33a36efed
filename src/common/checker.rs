//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::constants::SIMPLEX_TOLERANCE;
use crate::error::{BoostError, Result};


/// Check whether a feature vector has the dimensionality
/// fixed at training time.
#[inline(always)]
pub(crate) fn check_dimension(expected: usize, x: &[f64]) -> Result<()> {
    if x.len() != expected {
        return Err(BoostError::DimensionMismatch {
            expected,
            found: x.len(),
        });
    }
    Ok(())
}


/// Returns `true` if `dist` is a probability vector.
#[inline(always)]
pub(crate) fn is_distribution(dist: &[f64]) -> bool {
    let sum = dist.iter().sum::<f64>();
    (sum - 1f64).abs() < SIMPLEX_TOLERANCE
        && dist.iter().all(|d| *d >= 0f64)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension() {
        assert!(check_dimension(2, &[0.0, 1.0]).is_ok());
        assert!(matches!(
            check_dimension(2, &[0.0]),
            Err(BoostError::DimensionMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn distribution() {
        assert!(is_distribution(&[0.25, 0.75]));
        assert!(!is_distribution(&[0.25, 0.25]));
        assert!(!is_distribution(&[1.5, -0.5]));
    }
}
