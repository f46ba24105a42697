use std::sync::Arc;

use ndarray::{Array1, Array2};

use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::ModelBuilder;
use crate::search::SearchStrategy;

/// Adapts any `SearchStrategy` into a `ClassifierModel`.
///
/// `fit` runs the entire feature selection routine to conclusion and
/// leaves the winning fitted model inside the pipeline. Successive fits
/// are independent of one another: each call discards any prior result
/// before searching. `predict` and `score` delegate to the stored model
/// and are `NotFitted` errors before the first successful fit.
pub struct FeatureSelectionPipeline {
    searcher: Arc<dyn SearchStrategy>,
    current: Option<Box<dyn ClassifierModel>>,
    support: Option<Vec<usize>>,
}

impl FeatureSelectionPipeline {
    pub fn new(searcher: Arc<dyn SearchStrategy>) -> Self {
        Self {
            searcher,
            current: None,
            support: None,
        }
    }

    /// Zero-argument constructor over a shared searcher, for registering
    /// a pipeline with the evaluator. Every call yields a genuinely
    /// fresh pipeline so no state leaks across folds.
    pub fn constructor(searcher: Arc<dyn SearchStrategy>) -> ModelBuilder {
        Box::new(move || Box::new(FeatureSelectionPipeline::new(searcher.clone())))
    }

    fn fitted(&self) -> Result<&dyn ClassifierModel, ModelError> {
        self.current.as_deref().ok_or(ModelError::NotFitted)
    }
}

impl ClassifierModel for FeatureSelectionPipeline {
    fn fit(&mut self, x: &Array2<i32>, y: &Array1<i32>) -> Result<(), ModelError> {
        // independent restart: a failed search leaves no stale result
        self.current = None;
        self.support = None;

        let model = self.searcher.search(x, y)?;
        self.support = model.support().map(|s| s.to_vec());
        log::trace!(
            "pipeline fit: searcher settled on support {:?}",
            self.support
        );
        self.current = Some(model);
        Ok(())
    }

    fn predict(&self, x: &Array2<i32>) -> Result<Array1<i32>, ModelError> {
        self.fitted()?.predict(x)
    }

    fn score(&self, x: &Array2<i32>, y: &Array1<i32>) -> Result<f64, ModelError> {
        self.fitted()?.score(x, y)
    }

    fn support(&self) -> Option<&[usize]> {
        self.support.as_deref()
    }

    fn name(&self) -> &str {
        "feature_selection_pipeline"
    }
}
