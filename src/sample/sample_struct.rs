use polars::prelude::*;

use crate::error::{BoostError, Result};
use super::feature_struct::*;
use super::labels::LabelMap;
use super::template::Template;

use std::ops::Index;


/// One labeled feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Feature values.
    pub features: Vec<f64>,
    /// Class label.
    pub label: f64,
}


impl Sample {
    /// Construct a new sample.
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }
}


/// Struct `TrainingSet` holds a batch of labeled samples
/// column by column.
///
/// A `TrainingSet` is never empty,
/// every sample has the same number of features,
/// all values are finite,
/// and the labels take at most two distinct values.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) votes: Vec<f64>,
    pub(super) labels: LabelMap,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl TrainingSet {
    /// Construct a training set from labeled samples.
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let rows = samples.iter()
            .map(|s| (&s.features[..], Ok(s.label)));
        Self::from_rows(rows)
    }


    /// Construct a training set from templates.
    /// The label of each template is read from the field `input_variable`.
    pub fn from_templates(templates: &[Template], input_variable: &str)
        -> Result<Self>
    {
        let rows = templates.iter()
            .map(|t| {
                let label = t.get(input_variable)
                    .ok_or_else(|| {
                        BoostError::MissingLabel(input_variable.to_string())
                    });
                (&t.data[..], label)
            });
        Self::from_rows(rows)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `TrainingSet`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// Every column is cast to `f64`; missing values are rejected.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_sample, _) = data.shape();
        if target.len() != n_sample {
            return Err(BoostError::InvalidInput(format!(
                "the target has {} rows, the data has {n_sample}",
                target.len(),
            )));
        }

        let target = series_to_vec(&target)?;
        let features = data.get_columns()
            .iter()
            .map(|series| {
                let values = series_to_vec(series)?;
                Ok(Feature::from_values(series.name(), values))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_columns(features, target)
    }


    fn from_rows<'a, I>(rows: I) -> Result<Self>
        where I: Iterator<Item = (&'a [f64], Result<f64>)>,
    {
        let mut features: Vec<Feature> = Vec::new();
        let mut target = Vec::new();

        for (i, (x, y)) in rows.enumerate() {
            if i == 0 {
                features = (1..=x.len())
                    .map(|k| Feature::new(format!("Feat. [{k}]")))
                    .collect();
            } else if x.len() != features.len() {
                return Err(BoostError::DimensionMismatch {
                    expected: features.len(),
                    found: x.len(),
                });
            }

            target.push(y?);
            features.iter_mut()
                .zip(x)
                .for_each(|(feat, &v)| feat.append(v));
        }

        Self::from_columns(features, target)
    }


    fn from_columns(features: Vec<Feature>, target: Vec<f64>)
        -> Result<Self>
    {
        let n_sample = target.len();
        if n_sample == 0 {
            return Err(BoostError::EmptyTrainingSet);
        }

        let finite = features.iter()
            .all(|feat| feat.values().iter().all(|x| x.is_finite()));
        if !finite {
            return Err(BoostError::NonFiniteValue);
        }

        let labels = LabelMap::from_labels(&target)?;
        let votes = target.iter()
            .map(|&y| labels.to_vote(y))
            .collect();
        let n_feature = features.len();

        let set = Self {
            features, target, votes, labels, n_sample, n_feature,
        };
        Ok(set)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the labels.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the labels converted to votes `±1`.
    pub fn votes(&self) -> &[f64] {
        &self.votes[..]
    }


    /// Returns the label mapping of this set.
    pub fn labels(&self) -> LabelMap {
        self.labels
    }


    /// Returns the type of every column:
    /// `n_feature` numerical columns followed by the categorical label.
    pub fn feature_types(&self) -> Vec<FeatureType> {
        let mut types = vec![FeatureType::Numerical; self.n_feature];
        types.push(FeatureType::Categorical);
        types
    }


    /// Returns the feature vector of the `idx`-th instance.
    pub fn instance(&self, idx: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[idx])
            .collect()
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        (self.instance(idx), self.target[idx])
    }


    /// Returns the training set made of the instances at `indices`.
    /// The label mapping is inherited from `self`
    /// so that the votes agree with the parent set.
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.subset(indices))
            .collect();
        let target = indices.iter().map(|&i| self.target[i]).collect();
        let votes = indices.iter().map(|&i| self.votes[i]).collect();

        Self {
            features,
            target,
            votes,
            labels: self.labels,
            n_sample: indices.len(),
            n_feature: self.n_feature,
        }
    }
}


fn series_to_vec(series: &Series) -> Result<Vec<f64>> {
    let values = series.cast(&DataType::Float64)
        .map_err(|e| BoostError::InvalidInput(e.to_string()))?;
    let values = values.f64()
        .map_err(|e| BoostError::InvalidInput(e.to_string()))?
        .into_iter()
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| {
            BoostError::InvalidInput(
                format!("the column `{}` has missing values", series.name())
            )
        })?;
    Ok(values)
}


impl Index<usize> for TrainingSet {
    type Output = Feature;

    fn index(&self, feature: usize) -> &Self::Output {
        &self.features[feature]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Vec<Sample> {
        vec![
            Sample::new(vec![0.1, 0.2], 1.0),
            Sample::new(vec![0.9, 0.8], -1.0),
            Sample::new(vec![0.4, 0.3], 1.0),
        ]
    }

    #[test]
    fn columns_and_votes() {
        let set = TrainingSet::from_samples(&toy()).unwrap();
        assert_eq!(set.shape(), (3, 2));
        assert_eq!(set[0].values(), &[0.1, 0.9, 0.4]);
        assert_eq!(set[1].values(), &[0.2, 0.8, 0.3]);
        assert_eq!(set.votes(), &[1.0, -1.0, 1.0]);
        assert_eq!(set.at(1), (vec![0.9, 0.8], -1.0));
        assert_eq!(
            set.feature_types(),
            vec![
                FeatureType::Numerical,
                FeatureType::Numerical,
                FeatureType::Categorical,
            ]
        );
    }

    #[test]
    fn rejects_empty_and_ragged() {
        let err = TrainingSet::from_samples(&[]).unwrap_err();
        assert!(matches!(err, BoostError::EmptyTrainingSet));

        let mut samples = toy();
        samples.push(Sample::new(vec![0.5], 1.0));
        let err = TrainingSet::from_samples(&samples).unwrap_err();
        assert!(matches!(
            err,
            BoostError::DimensionMismatch { expected: 2, found: 1 }
        ));

        let mut samples = toy();
        samples[0].features[1] = f64::INFINITY;
        let err = TrainingSet::from_samples(&samples).unwrap_err();
        assert!(matches!(err, BoostError::NonFiniteValue));
    }

    #[test]
    fn reads_labels_from_templates() {
        let templates = vec![
            Template::new(vec![1.0]).with_field("Gender", 0.0),
            Template::new(vec![2.0]).with_field("Gender", 1.0),
        ];
        let set = TrainingSet::from_templates(&templates, "Gender").unwrap();
        assert_eq!(set.target(), &[0.0, 1.0]);
        assert_eq!(set.votes(), &[-1.0, 1.0]);

        let err = TrainingSet::from_templates(&templates, "Label")
            .unwrap_err();
        assert!(matches!(err, BoostError::MissingLabel(_)));
    }

    #[test]
    fn subset_keeps_label_mapping() {
        let set = TrainingSet::from_samples(&toy()).unwrap();
        let sub = set.subset(&[0, 2]);
        assert_eq!(sub.shape(), (2, 2));
        assert_eq!(sub.votes(), &[1.0, 1.0]);
        assert_eq!(sub.labels(), set.labels());
        assert_eq!(sub.instance(1), vec![0.4, 0.3]);
    }
}
