//! Split scoring and leaf values of the decision tree.
//!
//! Every node is summarized by [`NodeStats`],
//! the weighted moments of the response over the node's examples.
//! Both the impurity of a node and its leaf value are functions
//! of those moments only, so a split can be scored by
//! moving examples from the right child to the left one
//! in ascending order of a feature.
use serde::{Serialize, Deserialize};

use crate::{FeatureType, SplitCriteria, TrainingSet};
use crate::constants::LOG_ODDS_CLAMP;
use crate::weak_learner::type_and_struct::*;

use std::fmt;
use std::cmp::Ordering;


/// Weighted moments `(Σw, Σw·r, Σw·r²)` of the response `r`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct NodeStats {
    pub(crate) weight: f64,
    pub(crate) weighted_sum: f64,
    pub(crate) weighted_square: f64,
}


impl NodeStats {
    #[inline]
    pub(crate) fn from_indices(dist: &[f64], response: &[f64], indices: &[usize])
        -> Self
    {
        let mut stats = Self::default();
        indices.iter()
            .for_each(|&i| stats.push(dist[i], response[i]));
        stats
    }


    #[inline(always)]
    pub(crate) fn push(&mut self, w: f64, r: f64) {
        self.weight += w;
        self.weighted_sum += w * r;
        self.weighted_square += w * r * r;
    }


    #[inline(always)]
    pub(crate) fn pop(&mut self, w: f64, r: f64) {
        self.weight -= w;
        self.weighted_sum -= w * r;
        self.weighted_square -= w * r * r;
    }


    /// Mass of the examples with response `+1`.
    /// Meaningful only for a `±1` response.
    #[inline(always)]
    pub(crate) fn positive_mass(&self) -> f64 {
        (0.5 * (self.weight + self.weighted_sum)).max(0f64)
    }


    /// Mass of the examples with response `-1`.
    /// Meaningful only for a `±1` response.
    #[inline(always)]
    pub(crate) fn negative_mass(&self) -> f64 {
        (0.5 * (self.weight - self.weighted_sum)).max(0f64)
    }
}


/// The rule that assigns a value to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafValue {
    /// The sign of the weighted response, ties vote `+1`.
    Vote,
    /// Half the log-odds `½ ln(p / (1 - p))`
    /// of the weighted share `p = W₊ / W` of the class `+1`,
    /// with `p` clamped to `[1e-5, 1 - 1e-5]`.
    LogOdds,
    /// The weighted mean of the response.
    Mean,
}


impl LeafValue {
    /// Returns the leaf value for a node with the given moments.
    #[inline]
    pub(crate) fn value(&self, stats: &NodeStats) -> f64 {
        match self {
            Self::Vote => {
                if stats.weighted_sum >= 0f64 { 1f64 } else { -1f64 }
            },
            Self::LogOdds => {
                if stats.weight <= 0f64 { return 0f64; }
                let p = (stats.positive_mass() / stats.weight)
                    .clamp(LOG_ODDS_CLAMP, 1f64 - LOG_ODDS_CLAMP);
                0.5 * (p / (1f64 - p)).ln()
            },
            Self::Mean => {
                if stats.weight <= 0f64 { return 0f64; }
                stats.weighted_sum / stats.weight
            },
        }
    }
}


impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vote => "Vote (±1)",
            Self::LogOdds => "Half log-odds",
            Self::Mean => "Weighted mean",
        };
        write!(f, "{name}")
    }
}


impl SplitCriteria {
    /// Returns the impurity of a node.
    /// `Default` must be resolved beforehand;
    /// if not, it is treated as `Sqerr`.
    #[inline]
    pub(crate) fn impurity(&self, stats: &NodeStats) -> f64 {
        if stats.weight <= 0f64 { return 0f64; }
        match self {
            Self::Gini => {
                let pos = stats.positive_mass();
                let neg = stats.negative_mass();
                2f64 * pos * neg / stats.weight
            },
            Self::Misclass => {
                stats.positive_mass().min(stats.negative_mass())
            },
            Self::Sqerr | Self::Default => {
                let mean_square = stats.weighted_sum.powi(2) / stats.weight;
                (stats.weighted_square - mean_square).max(0f64)
            },
        }
    }


    /// Returns the best splitting rule `(feature, threshold, score)`
    /// over the examples at `indices`,
    /// or `None` if every numerical feature takes a single value on them.
    ///
    /// Only the columns tagged `FeatureType::Numerical` in `types`
    /// are searched.
    /// Candidate thresholds are the midpoints
    /// between consecutive distinct values of a feature.
    /// Ties keep the first candidate found.
    pub(crate) fn best_split(
        &self,
        sample: &TrainingSet,
        types: &[FeatureType],
        dist: &[f64],
        response: &[f64],
        indices: &[usize],
    ) -> Option<(usize, Threshold, Score)>
    {
        let total = NodeStats::from_indices(dist, response, indices);

        let numerical = sample.features()
            .iter()
            .enumerate()
            .filter(|(j, _)| types.get(*j) == Some(&FeatureType::Numerical));

        let mut best: Option<(usize, Threshold, Score)> = None;
        for (j, feature) in numerical {
            let mut sorted = indices.to_vec();
            sorted.sort_by(|&a, &b| {
                feature[a].partial_cmp(&feature[b])
                    .unwrap_or(Ordering::Equal)
            });

            let mut left = NodeStats::default();
            let mut right = total;

            for pair in sorted.windows(2) {
                let (i, next) = (pair[0], pair[1]);
                left.push(dist[i], response[i]);
                right.pop(dist[i], response[i]);

                // Examples sharing a value must go to the same side.
                if feature[i] >= feature[next] { continue; }

                let score = Score::from(self.impurity(&left))
                    + Score::from(self.impurity(&right));
                let improves = best.as_ref()
                    .map_or(true, |(_, _, s)| score < *s);
                if improves {
                    let threshold = 0.5 * (feature[i] + feature[next]);
                    best = Some((j, Threshold::from(threshold), score));
                }
            }
        }
        best
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;

    fn stats(pairs: &[(f64, f64)]) -> NodeStats {
        let mut s = NodeStats::default();
        pairs.iter().for_each(|&(w, r)| s.push(w, r));
        s
    }

    #[test]
    fn impurities_of_a_mixed_node() {
        // 0.3 mass on `+1`, 0.1 mass on `-1`.
        let s = stats(&[(0.2, 1.0), (0.1, 1.0), (0.1, -1.0)]);
        assert!((s.positive_mass() - 0.3).abs() < 1e-12);
        assert!((s.negative_mass() - 0.1).abs() < 1e-12);

        let gini = SplitCriteria::Gini.impurity(&s);
        assert!((gini - 2.0 * 0.3 * 0.1 / 0.4).abs() < 1e-12);

        let miss = SplitCriteria::Misclass.impurity(&s);
        assert!((miss - 0.1).abs() < 1e-12);

        // Σw r² - (Σw r)² / Σw = 0.4 - 0.04 / 0.4
        let sqerr = SplitCriteria::Sqerr.impurity(&s);
        assert!((sqerr - 0.3).abs() < 1e-12);
    }

    #[test]
    fn pure_nodes_have_no_impurity() {
        let s = stats(&[(0.5, -1.0), (0.25, -1.0)]);
        assert_eq!(SplitCriteria::Gini.impurity(&s), 0.0);
        assert_eq!(SplitCriteria::Misclass.impurity(&s), 0.0);
        assert!(SplitCriteria::Sqerr.impurity(&s) < 1e-15);
    }

    #[test]
    fn leaf_values() {
        let s = stats(&[(0.3, 1.0), (0.1, -1.0)]);
        assert_eq!(LeafValue::Vote.value(&s), 1.0);
        assert!((LeafValue::LogOdds.value(&s) - 0.5 * 3f64.ln()).abs() < 1e-12);
        assert!((LeafValue::Mean.value(&s) - 0.5).abs() < 1e-12);

        // A pure node gets a bounded log-odds.
        let pure = stats(&[(0.4, -1.0)]);
        let v = LeafValue::LogOdds.value(&pure);
        let bound = 0.5 * ((1.0 - LOG_ODDS_CLAMP) / LOG_ODDS_CLAMP).ln();
        assert!((v + bound).abs() < 1e-9);
        assert!(bound < 6.0);

        assert_eq!(LeafValue::Mean.value(&NodeStats::default()), 0.0);
    }

    #[test]
    fn finds_the_separating_threshold() {
        let samples = vec![
            Sample::new(vec![5.0, 1.0], -1.0),
            Sample::new(vec![1.0, 1.0], 1.0),
            Sample::new(vec![2.0, 1.0], 1.0),
            Sample::new(vec![4.0, 1.0], -1.0),
        ];
        let set = TrainingSet::from_samples(&samples).unwrap();
        let dist = vec![0.25; 4];
        let indices = (0..4).collect::<Vec<_>>();

        for criteria in [SplitCriteria::Gini, SplitCriteria::Misclass, SplitCriteria::Sqerr] {
            let (feature, threshold, score) = criteria
                .best_split(&set, &set.feature_types(), &dist, set.votes(), &indices)
                .unwrap();
            assert_eq!(feature, 0);
            assert_eq!(threshold.0, 3.0);
            assert!(score.0.abs() < 1e-12);
        }
    }

    #[test]
    fn no_split_on_constant_features() {
        let samples = vec![
            Sample::new(vec![1.0], -1.0),
            Sample::new(vec![1.0], 1.0),
        ];
        let set = TrainingSet::from_samples(&samples).unwrap();
        let split = SplitCriteria::Gini
            .best_split(&set, &set.feature_types(), &[0.5, 0.5], set.votes(), &[0, 1]);
        assert!(split.is_none());
    }

    #[test]
    fn categorical_columns_are_not_searched() {
        // The first column separates the classes, the second one does not.
        let samples = vec![
            Sample::new(vec![0.0, 3.0], -1.0),
            Sample::new(vec![1.0, 1.0], -1.0),
            Sample::new(vec![2.0, 2.0], 1.0),
            Sample::new(vec![3.0, 0.0], 1.0),
        ];
        let set = TrainingSet::from_samples(&samples).unwrap();
        let dist = vec![0.25; 4];
        let indices = (0..4).collect::<Vec<_>>();

        let (feature, _, _) = SplitCriteria::Gini
            .best_split(&set, &set.feature_types(), &dist, set.votes(), &indices)
            .unwrap();
        assert_eq!(feature, 0);

        let types = [
            FeatureType::Categorical,
            FeatureType::Numerical,
            FeatureType::Categorical,
        ];
        let (feature, _, score) = SplitCriteria::Gini
            .best_split(&set, &types, &dist, set.votes(), &indices)
            .unwrap();
        assert_eq!(feature, 1);
        assert!(score.0 > 0.0);

        let types = [FeatureType::Categorical; 3];
        let split = SplitCriteria::Gini
            .best_split(&set, &types, &dist, set.votes(), &indices);
        assert!(split.is_none());
    }
}
