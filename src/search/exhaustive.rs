//! Exhaustive sweep over the rank parameter of a feature-ranking model.
//!
//! Fits one model per `n` in `[min_n, max_n]` and keeps the best by
//! strict `>` comparison, so the smallest `n` achieving the maximum
//! training score wins all ties. That tie-break is a documented
//! invariant of the sweep, not an implementation accident.
use ndarray::{Array1, Array2};

use crate::config::SweepConfig;
use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::RankedModelBuilder;
use crate::search::SearchStrategy;

pub struct ExhaustiveRankSearch {
    builder: RankedModelBuilder,
    config: SweepConfig,
}

impl ExhaustiveRankSearch {
    /// Build a sweep; `min_n > max_n` is a configuration error.
    pub fn new(builder: RankedModelBuilder, config: SweepConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self { builder, config })
    }
}

impl SearchStrategy for ExhaustiveRankSearch {
    fn search(
        &self,
        x: &Array2<i32>,
        y: &Array1<i32>,
    ) -> Result<Box<dyn ClassifierModel>, ModelError> {
        let mut best = (self.builder)(self.config.min_n);
        best.fit(x, y)?;
        let mut best_score = best.score(x, y)?;

        for n in self.config.min_n + 1..=self.config.max_n {
            let mut candidate = (self.builder)(n);
            candidate.fit(x, y)?;
            let candidate_score = candidate.score(x, y)?;

            if candidate_score > best_score {
                log::trace!(
                    "rank sweep: n={} improves score {:.4} -> {:.4}",
                    n,
                    best_score,
                    candidate_score
                );
                best = candidate;
                best_score = candidate_score;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    /// Fixed per-`n` score table; the support is the first `n` columns.
    struct TableStub {
        n: usize,
        support: Vec<usize>,
        scores: &'static [f64],
    }

    impl ClassifierModel for TableStub {
        fn fit(&mut self, x: &Array2<i32>, _y: &Array1<i32>) -> Result<(), ModelError> {
            self.support = (0..self.n.min(x.ncols())).collect();
            Ok(())
        }

        fn predict(&self, x: &Array2<i32>) -> Result<Array1<i32>, ModelError> {
            Ok(Array1::zeros(x.nrows()))
        }

        fn score(&self, _x: &Array2<i32>, _y: &Array1<i32>) -> Result<f64, ModelError> {
            Ok(self.scores[self.n - 1])
        }

        fn support(&self) -> Option<&[usize]> {
            Some(&self.support)
        }
    }

    fn table_builder(scores: &'static [f64]) -> RankedModelBuilder {
        Box::new(move |n| {
            Box::new(TableStub {
                n,
                support: Vec::new(),
                scores,
            })
        })
    }

    fn toy_data() -> (Array2<i32>, Array1<i32>) {
        let x = arr2(&[[0, 1, 0, 1], [1, 0, 1, 0], [0, 0, 1, 1], [1, 1, 0, 0]]);
        let y = Array1::from_vec(vec![0, 1, 0, 1]);
        (x, y)
    }

    #[test]
    fn picks_the_best_n() {
        let (x, y) = toy_data();
        let searcher = ExhaustiveRankSearch::new(
            table_builder(&[0.5, 0.9, 0.7, 0.6]),
            SweepConfig::new(1, 4),
        )
        .unwrap();
        let best = searcher.search(&x, &y).unwrap();
        assert_eq!(best.support().unwrap(), &[0, 1]);
        assert!((best.score(&x, &y).unwrap() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn result_is_at_least_the_min_n_baseline() {
        let (x, y) = toy_data();
        let scores: &[f64] = &[0.6, 0.4, 0.3, 0.2];
        let searcher =
            ExhaustiveRankSearch::new(table_builder(scores), SweepConfig::new(1, 4)).unwrap();
        let best = searcher.search(&x, &y).unwrap();
        assert!(best.score(&x, &y).unwrap() >= scores[0]);
        // nothing beat the baseline, so the baseline itself is returned
        assert_eq!(best.support().unwrap(), &[0]);
    }

    #[test]
    fn smallest_n_wins_ties() {
        let (x, y) = toy_data();
        let searcher = ExhaustiveRankSearch::new(
            table_builder(&[0.5, 0.8, 0.8, 0.8]),
            SweepConfig::new(1, 4),
        )
        .unwrap();
        let best = searcher.search(&x, &y).unwrap();
        assert_eq!(best.support().unwrap(), &[0, 1]);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = ExhaustiveRankSearch::new(table_builder(&[0.5]), SweepConfig::new(3, 1));
        assert!(matches!(err, Err(ModelError::Config(_))));
    }
}
