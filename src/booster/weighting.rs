//! The distribution over training examples.
use crate::common::utils;
use crate::constants::{LOGIT_RESPONSE_MAX, LOGIT_WEIGHT_MIN};

use std::cmp::Ordering;


/// Owns the weight vector of one boosting run,
/// and the response the next weak learner fits.
///
/// The weights are non-negative and sum to one
/// after every update.
#[derive(Debug, Clone)]
pub struct SampleWeighting {
    dist: Vec<f64>,
    response: Vec<f64>,
    trim_rate: f64,
}


impl SampleWeighting {
    /// Construct a weighting from its parts.
    /// `dist` is used as given.
    pub fn new(dist: Vec<f64>, response: Vec<f64>, trim_rate: f64) -> Self {
        Self { dist, response, trim_rate, }
    }


    /// The distribution `d_i ∝ exp(-y_i F_i)`
    /// for the accumulated scores `F(x_i)`.
    /// The response is the vote and nothing is trimmed.
    pub fn exponential_loss(votes: &[f64], scores: &[f64]) -> Self {
        let mut dist = utils::margins(votes, scores)
            .into_iter()
            .map(|m| -m)
            .collect::<Vec<_>>();
        let normalizer = utils::log_sum_exp(&dist[..]);
        dist.iter_mut()
            .for_each(|d| *d = (*d - normalizer).exp());

        Self::new(dist, votes.to_vec(), 1f64)
    }


    /// The uniform distribution over `votes.len()` examples.
    /// The response is the vote.
    pub fn uniform(votes: &[f64], trim_rate: f64) -> Self {
        let n_sample = votes.len();
        let uni = 1f64 / n_sample as f64;
        Self {
            dist: vec![uni; n_sample],
            response: votes.to_vec(),
            trim_rate,
        }
    }


    /// The current weights.
    pub fn weights(&self) -> &[f64] {
        &self.dist[..]
    }


    /// The response the next weak learner fits.
    pub fn response(&self) -> &[f64] {
        &self.response[..]
    }


    /// The weighted error `Σ_{i: sign(h_i) ≠ y_i} d_i`
    /// of the predictions over all examples.
    pub fn weighted_error(&self, votes: &[f64], predictions: &[f64]) -> f64 {
        self.dist.iter()
            .zip(votes.iter().zip(predictions))
            .filter(|(_, (y, h))| **y != utils::sign(**h))
            .map(|(d, _)| *d)
            .sum::<f64>()
    }


    /// Updates `d_i ← d_i exp(-α y_i h_i)` and renormalizes.
    ///
    /// To prevent overflow, the update is computed
    /// on the logarithm of the weights.
    pub fn update_exponential(
        &mut self,
        votes: &[f64],
        predictions: &[f64],
        coefficient: f64,
    )
    {
        let margins = utils::margins(votes, predictions);
        self.dist.iter_mut()
            .zip(margins)
            .for_each(|(d, m)| *d = d.ln() - coefficient * m);

        let normalizer = utils::log_sum_exp(&self.dist[..]);
        self.dist.iter_mut()
            .for_each(|d| *d = (*d - normalizer).exp());
    }


    /// Sets the LogitBoost weights and working response
    /// for the accumulated scores `F(x_i)`:
    /// `p_i = 1 / (1 + exp(-2F_i))`,
    /// `d_i ∝ p_i (1 - p_i)`,
    /// `z_i = (y*_i - p_i) / (p_i (1 - p_i))`, `y* ∈ {0, 1}`.
    pub fn assign_logit(&mut self, votes: &[f64], scores: &[f64]) {
        self.dist.clear();
        self.response.clear();
        for (y, f) in votes.iter().zip(scores) {
            let p = utils::logistic(2f64 * f);
            let w = (p * (1f64 - p)).max(LOGIT_WEIGHT_MIN);
            let target = if *y > 0f64 { 1f64 } else { 0f64 };
            let z = ((target - p) / w)
                .clamp(-LOGIT_RESPONSE_MAX, LOGIT_RESPONSE_MAX);

            self.dist.push(w);
            self.response.push(z);
        }
        utils::normalize(&mut self.dist[..]);
    }


    /// Returns the weights the weak learner grows on.
    ///
    /// The shortest run of the heaviest examples
    /// whose mass reaches `trim_rate` sets a cutoff weight.
    /// Every example at least as heavy as the cutoff keeps its weight,
    /// so ties are never split. The others get zero.
    /// `trim_rate == 1` keeps every example.
    pub fn trimmed(&self) -> Vec<f64> {
        if self.trim_rate >= 1f64 {
            return self.dist.clone();
        }

        let mut sorted = self.dist.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        let mut cutoff = sorted.last().copied().unwrap_or(0f64);
        let mut mass = 0f64;
        for &d in &sorted {
            mass += d;
            if mass >= self.trim_rate {
                cutoff = d;
                break;
            }
        }

        self.dist.iter()
            .map(|&d| if d >= cutoff { d } else { 0f64 })
            .collect()
    }


    /// Returns the number of examples that survive trimming.
    pub fn active(&self) -> usize {
        self.trimmed()
            .into_iter()
            .filter(|d| *d > 0f64)
            .count()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::checker::is_distribution;

    #[test]
    fn exponential_update_moves_mass_to_mistakes() {
        let votes = [1.0, 1.0, -1.0, -1.0];
        let mut w = SampleWeighting::uniform(&votes, 1.0);

        let predictions = [1.0, 1.0, -1.0, 1.0];
        let error = w.weighted_error(&votes, &predictions);
        assert_eq!(error, 0.25);

        let alpha = 0.5 * ((1.0 - error) / error).ln();
        w.update_exponential(&votes, &predictions, alpha);

        assert!(is_distribution(w.weights()));
        // After the update, the mistaken example holds half the mass.
        assert!((w.weights()[3] - 0.5).abs() < 1e-12);
        assert!((w.weighted_error(&votes, &predictions) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn logit_starts_from_twice_the_vote() {
        let votes = [1.0, -1.0, 1.0];
        let mut w = SampleWeighting::uniform(&votes, 1.0);
        w.assign_logit(&votes, &[0.0; 3]);

        assert!(is_distribution(w.weights()));
        assert!(w.weights().iter().all(|d| (d - 1.0 / 3.0).abs() < 1e-12));
        assert_eq!(w.response(), &[2.0, -2.0, 2.0]);
    }

    #[test]
    fn logit_response_is_bounded() {
        let votes = [1.0, -1.0];
        let mut w = SampleWeighting::uniform(&votes, 1.0);
        // Confidently wrong on both examples.
        w.assign_logit(&votes, &[-50.0, 50.0]);
        assert!(is_distribution(w.weights()));
        assert_eq!(w.response(), &[4.0, -4.0]);
    }

    #[test]
    fn exponential_loss_weights_the_margins() {
        let votes = [1.0, -1.0, 1.0];
        let w = SampleWeighting::exponential_loss(&votes, &[0.0; 3]);
        assert!(w.weights().iter().all(|d| (d - 1.0 / 3.0).abs() < 1e-12));

        // Margins `1, -1, 0`.
        let w = SampleWeighting::exponential_loss(&votes, &[1.0, 1.0, 0.0]);
        assert!(is_distribution(w.weights()));
        let z = (-1f64).exp() + 1f64.exp() + 1.0;
        assert!((w.weights()[0] - (-1f64).exp() / z).abs() < 1e-12);
        assert!((w.weights()[1] - 1f64.exp() / z).abs() < 1e-12);

        let error = w.weighted_error(&votes, &[1.0, 1.0, 1.0]);
        assert!((error - 1f64.exp() / z).abs() < 1e-12);
    }

    #[test]
    fn trimming_keeps_the_heaviest_prefix() {
        let votes = [1.0; 4];
        let mut w = SampleWeighting::uniform(&votes, 0.7);
        w.dist = vec![0.1, 0.5, 0.3, 0.1];

        let t = w.trimmed();
        assert_eq!(t, vec![0.0, 0.5, 0.3, 0.0]);
        let kept = t.iter().sum::<f64>();
        assert!(kept >= 0.7);
    }

    #[test]
    fn trimming_keeps_at_least_one_example() {
        let votes = [1.0; 3];
        let mut w = SampleWeighting::uniform(&votes, 0.01);
        w.dist = vec![0.2, 0.6, 0.2];
        let t = w.trimmed();
        assert_eq!(t.iter().filter(|d| **d > 0.0).count(), 1);
        assert_eq!(t[1], 0.6);

        let w = SampleWeighting::uniform(&votes, 1.0);
        assert!(w.trimmed().iter().all(|d| *d > 0.0));
    }

    #[test]
    fn trimming_never_splits_ties() {
        let votes = [1.0; 60];
        let w = SampleWeighting::uniform(&votes, 0.95);
        assert_eq!(w.trimmed(), w.weights().to_vec());
        assert_eq!(w.active(), 60);

        let votes = [1.0; 4];
        let w = SampleWeighting::new(
            vec![0.4, 0.25, 0.25, 0.1], votes.to_vec(), 0.5
        );
        // `0.4 + 0.25` reaches the rate, the other `0.25` is kept too.
        assert_eq!(w.trimmed(), vec![0.4, 0.25, 0.25, 0.0]);
        assert_eq!(w.active(), 3);
    }
}
