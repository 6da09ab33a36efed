//! This file provides some common functions
//! such as margin calculation.


/// Returns `+1` for non-negative values and `-1` otherwise.
#[inline(always)]
pub fn sign(x: f64) -> f64 {
    if x >= 0f64 { 1f64 } else { -1f64 }
}


/// The logistic function `1 / (1 + exp(-x))`.
#[inline(always)]
pub fn logistic(x: f64) -> f64 {
    if x >= 0f64 {
        1f64 / (1f64 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1f64 + e)
    }
}


/// Returns the margins `y_i * f(x_i)` for the given votes and scores.
#[inline(always)]
pub fn margins(votes: &[f64], scores: &[f64]) -> Vec<f64> {
    votes.iter()
        .zip(scores)
        .map(|(y, f)| y * f)
        .collect()
}


/// Returns the fraction of `scores` whose sign differs from `votes`.
#[inline(always)]
pub fn zero_one_error(votes: &[f64], scores: &[f64]) -> f64 {
    let n_sample = votes.len();
    if n_sample == 0 { return 0f64; }

    let miss = votes.iter()
        .zip(scores)
        .filter(|(y, f)| **y != sign(**f))
        .count();
    miss as f64 / n_sample as f64
}


/// Computes `ln(sum(exp(items)))`.
/// The terms are accumulated in ascending order
/// to prevent overflow and loss of precision.
/// Returns `-inf` for an empty slice.
#[inline(always)]
pub fn log_sum_exp(items: &[f64]) -> f64 {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut iter = sorted.into_iter();
    let Some(mut acc) = iter.next() else {
        return f64::NEG_INFINITY;
    };

    for b in iter {
        let (large, small) = if acc < b { (b, acc) } else { (acc, b) };
        if small == f64::NEG_INFINITY {
            acc = large;
            continue;
        }
        acc = large + (1f64 + (small - large).exp()).ln();
    }
    acc
}


/// Normalize `items` so that they sum to one.
/// Returns `false` (leaving `items` untouched)
/// if the total mass is not positive.
#[inline(always)]
pub fn normalize(items: &mut [f64]) -> bool {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    if !(z > 0f64) { return false; }

    items.iter_mut()
        .for_each(|item| { *item /= z; });
    true
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sum_exp_matches_direct_sum() {
        let items = [0.1f64.ln(), 0.2f64.ln(), 0.7f64.ln()];
        assert!(log_sum_exp(&items).abs() < 1e-12);

        let items = [1000.0, 1000.0];
        assert!((log_sum_exp(&items) - (1000.0 + 2f64.ln())).abs() < 1e-9);

        let items = [f64::NEG_INFINITY, 0.0];
        assert_eq!(log_sum_exp(&items), 0.0);
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn logistic_is_stable() {
        assert!((logistic(0.0) - 0.5).abs() < 1e-15);
        assert!(logistic(800.0) <= 1.0);
        assert!(logistic(-800.0) >= 0.0);
        assert!((logistic(2.0) + logistic(-2.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn zero_one() {
        let votes = [1.0, -1.0, 1.0, -1.0];
        let scores = [0.3, -2.0, -0.1, 0.0];
        assert_eq!(zero_one_error(&votes, &scores), 0.5);
    }

    #[test]
    fn normalizes() {
        let mut items = [1.0, 3.0];
        assert!(normalize(&mut items));
        assert_eq!(items, [0.25, 0.75]);

        let mut zeros = [0.0, 0.0];
        assert!(!normalize(&mut zeros));
    }
}
