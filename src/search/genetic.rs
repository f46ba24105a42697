//! Adapter for third-party population-based subset optimizers.
//!
//! The optimizer itself is an opaque collaborator behind
//! `SupportOptimizer`; this module only drives it and refits the
//! underlying model on whatever support it selects, so genetic search
//! plugs into a `FeatureSelectionPipeline` like any other strategy.
use ndarray::{Array1, Array2};

use crate::config::GeneticConfig;
use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::SupportModelBuilder;
use crate::search::SearchStrategy;

/// The contract a third-party population-based optimizer satisfies:
/// given a training slice and its evolution parameters, hand back the
/// selected feature subset.
pub trait SupportOptimizer {
    fn select(
        &self,
        x: &Array2<i32>,
        y: &Array1<i32>,
        config: &GeneticConfig,
    ) -> Result<Vec<usize>, ModelError>;
}

pub struct GeneticSearch {
    builder: SupportModelBuilder,
    optimizer: Box<dyn SupportOptimizer>,
    config: GeneticConfig,
}

impl GeneticSearch {
    pub fn new(
        builder: SupportModelBuilder,
        optimizer: Box<dyn SupportOptimizer>,
        config: GeneticConfig,
    ) -> Self {
        Self {
            builder,
            optimizer,
            config,
        }
    }
}

impl SearchStrategy for GeneticSearch {
    fn search(
        &self,
        x: &Array2<i32>,
        y: &Array1<i32>,
    ) -> Result<Box<dyn ClassifierModel>, ModelError> {
        let support = self.optimizer.select(x, y, &self.config)?;
        log::trace!(
            "genetic search selected {} of {} features",
            support.len(),
            x.ncols()
        );

        let mut model = (self.builder)(support);
        model.fit(x, y)?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    struct FixedOptimizer(Vec<usize>);

    impl SupportOptimizer for FixedOptimizer {
        fn select(
            &self,
            _x: &Array2<i32>,
            _y: &Array1<i32>,
            _config: &GeneticConfig,
        ) -> Result<Vec<usize>, ModelError> {
            Ok(self.0.clone())
        }
    }

    struct SubsetStub {
        support: Vec<usize>,
        fitted: bool,
    }

    impl ClassifierModel for SubsetStub {
        fn fit(&mut self, _x: &Array2<i32>, _y: &Array1<i32>) -> Result<(), ModelError> {
            self.fitted = true;
            Ok(())
        }

        fn predict(&self, x: &Array2<i32>) -> Result<Array1<i32>, ModelError> {
            if !self.fitted {
                return Err(ModelError::NotFitted);
            }
            Ok(Array1::zeros(x.nrows()))
        }

        fn support(&self) -> Option<&[usize]> {
            Some(&self.support)
        }
    }

    #[test]
    fn refits_builder_model_on_selected_support() {
        let x = arr2(&[[0, 1, 0], [1, 0, 1]]);
        let y = Array1::from_vec(vec![0, 1]);

        let builder: SupportModelBuilder = Box::new(|support| {
            Box::new(SubsetStub {
                support,
                fitted: false,
            })
        });
        let searcher = GeneticSearch::new(
            builder,
            Box::new(FixedOptimizer(vec![0, 2])),
            GeneticConfig::default(),
        );

        let model = searcher.search(&x, &y).unwrap();
        assert_eq!(model.support().unwrap(), &[0, 2]);
        // the returned model is fitted, not just constructed
        assert!(model.predict(&x).is_ok());
    }

    #[test]
    fn optimizer_failure_propagates() {
        struct FailingOptimizer;
        impl SupportOptimizer for FailingOptimizer {
            fn select(
                &self,
                _x: &Array2<i32>,
                _y: &Array1<i32>,
                _config: &GeneticConfig,
            ) -> Result<Vec<usize>, ModelError> {
                Err(ModelError::Fit("population collapsed".to_string()))
            }
        }

        let builder: SupportModelBuilder = Box::new(|support| {
            Box::new(SubsetStub {
                support,
                fitted: false,
            })
        });
        let searcher = GeneticSearch::new(
            builder,
            Box::new(FailingOptimizer),
            GeneticConfig::default(),
        );

        let x = arr2(&[[0, 1], [1, 0]]);
        let y = Array1::from_vec(vec![0, 1]);
        assert!(matches!(searcher.search(&x, &y), Err(ModelError::Fit(_))));
    }
}
