use crate::TrainingSet;


/// A trait that defines the behavor of classifier.
/// You only need to implement `confidence` method.
pub trait Classifier {
    /// Computes the confidence of the feature vector `x`.
    /// The sign is the predicted vote,
    /// the magnitude is the margin.
    fn confidence(&self, x: &[f64]) -> f64;


    /// Predicts the vote `+1` or `-1` of `x`.
    /// A zero confidence votes `+1`.
    fn predict(&self, x: &[f64]) -> i64 {
        let conf = self.confidence(x);
        if conf >= 0.0 { 1 } else { -1 }
    }


    /// Computes the confidence of every instance in `sample`.
    fn confidence_all(&self, sample: &TrainingSet) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.confidence(&sample.instance(row)))
            .collect::<Vec<_>>()
    }
}
