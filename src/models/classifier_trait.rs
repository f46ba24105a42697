use ndarray::{Array1, Array2};

use crate::error::ModelError;

/// The minimal contract every pluggable classifier satisfies.
///
/// A model instance is the sole mutable entity in the system: the
/// evaluator constructs a fresh instance per fold, fits it once, and
/// reads its scores and support afterwards. Fit failures propagate to
/// the caller unmodified; the core never retries or falls back.
pub trait ClassifierModel {
    /// Fit the model on integer-encoded features `x` and binary labels
    /// `y` (0/1). Must be safe to call once per fresh instance.
    fn fit(&mut self, x: &Array2<i32>, y: &Array1<i32>) -> Result<(), ModelError>;

    /// Predict a label for every row of `x`.
    fn predict(&self, x: &Array2<i32>) -> Result<Array1<i32>, ModelError>;

    /// Prediction accuracy against `y`.
    fn score(&self, x: &Array2<i32>, y: &Array1<i32>) -> Result<f64, ModelError> {
        let predictions = self.predict(x)?;
        if predictions.len() != y.len() {
            return Err(ModelError::LengthMismatch {
                predictions: predictions.len(),
                labels: y.len(),
            });
        }
        if y.is_empty() {
            return Err(ModelError::Config(
                "cannot score on an empty dataset".to_string(),
            ));
        }
        let correct = predictions
            .iter()
            .zip(y.iter())
            .filter(|(p, t)| p == t)
            .count();
        Ok(correct as f64 / y.len() as f64)
    }

    /// The feature-column indices this model consumes, readable after
    /// `fit`. `None` is the "all features" sentinel; `Some` is an
    /// ordered, duplicate-free subset of `[0, n_features)`.
    fn support(&self) -> Option<&[usize]>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    /// Always predicts the constant label it was built with.
    struct ConstantModel(i32);

    impl ClassifierModel for ConstantModel {
        fn fit(&mut self, _x: &Array2<i32>, _y: &Array1<i32>) -> Result<(), ModelError> {
            Ok(())
        }

        fn predict(&self, x: &Array2<i32>) -> Result<Array1<i32>, ModelError> {
            Ok(Array1::from_elem(x.nrows(), self.0))
        }

        fn support(&self) -> Option<&[usize]> {
            None
        }
    }

    #[test]
    fn default_score_is_accuracy() {
        let x = arr2(&[[0], [1], [2], [3]]);
        let y = arr1(&[1, 1, 0, 1]);
        let model = ConstantModel(1);
        let score = model.score(&x, &y).unwrap();
        assert!((score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn score_on_empty_rows_is_an_error() {
        let x = Array2::<i32>::zeros((0, 3));
        let y = Array1::<i32>::zeros(0);
        let model = ConstantModel(0);
        assert!(model.score(&x, &y).is_err());
    }
}
