//! Feature-subset search strategies.
//!
//! Every strategy consumes a training slice and returns a fitted model
//! with a populated support. Strategies own their randomness; the caller
//! only sees the final model.
pub mod annealing;
pub mod exhaustive;
pub mod genetic;

use ndarray::{Array1, Array2};

use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;

/// The minimal contract any feature-subset search satisfies for use in
/// a `FeatureSelectionPipeline`.
pub trait SearchStrategy {
    /// Discover the next best feature subset for `(x, y)` and return the
    /// model fitted on it, with `support()` populated.
    fn search(
        &self,
        x: &Array2<i32>,
        y: &Array1<i32>,
    ) -> Result<Box<dyn ClassifierModel>, ModelError>;
}
