//! Streaming k-fold cross-validation over many named model variants.
//!
//! The evaluator shuffles its dataset once at construction and derives
//! every fold from that fixed order. `run` hands back a lazy iterator:
//! nothing is trained until the consumer pulls, and the consumer may
//! stop after any number of folds, leaving the rest untrained. One pull
//! past the last fold yields the accumulated aggregate; the iterator is
//! fused afterwards.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::data_handling::{make_rng, Dataset};
use crate::error::ModelError;
use crate::models::factory::ModelBuilder;

/// Train/test accuracy of one model on one fold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoldScore {
    pub train: f64,
    pub test: f64,
}

/// Everything recorded about a single fold: per-model scores and the
/// support each model settled on.
#[derive(Debug, Clone, Serialize)]
pub struct FoldResult {
    pub scores: BTreeMap<String, FoldScore>,
    /// `None` means the model used the all-features sentinel.
    pub supports: BTreeMap<String, Option<Vec<usize>>>,
}

/// The final accumulated comparison across all folds. This is the sole
/// artifact a driver needs to persist a run summary.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Mean test accuracy per model across all folds.
    pub mean_test_accuracy: BTreeMap<String, f64>,
    /// Per model: fraction of folds (0..1) in which each feature index
    /// appeared in the model's support. Seeded with every index at 0.
    pub feature_frequency: BTreeMap<String, BTreeMap<usize, f64>>,
}

/// One item of the evaluation stream.
#[derive(Debug, Clone, Serialize)]
pub enum EvalStep {
    Fold(FoldResult),
    Aggregate(AggregateResult),
}

/// Evaluates multiple classifier variants on a binary classification
/// task using k-fold cross validation.
///
/// Models are registered as named zero-argument constructors so every
/// fold trains a fresh instance; within a fold they run strictly in the
/// map's iteration order.
pub struct ModelEvaluator {
    models: BTreeMap<String, ModelBuilder>,
    data: Dataset,
}

impl ModelEvaluator {
    /// Shuffles the dataset once with an entropy-seeded permutation;
    /// that order is fixed for the lifetime of the evaluator.
    pub fn new(models: BTreeMap<String, ModelBuilder>, data: Dataset) -> Self {
        Self::build(models, data, None)
    }

    /// Like `new`, but with a reproducible shuffle.
    pub fn with_seed(models: BTreeMap<String, ModelBuilder>, data: Dataset, seed: u64) -> Self {
        Self::build(models, data, Some(seed))
    }

    fn build(models: BTreeMap<String, ModelBuilder>, data: Dataset, seed: Option<u64>) -> Self {
        let mut rng = make_rng(seed);
        let data = data.shuffled(&mut rng);
        data.log_summary();
        ModelEvaluator { models, data }
    }

    /// Begin a cross-validation run, yielding `n_splits` fold results
    /// followed by one aggregate. Validates the split count up front;
    /// model failures surface through the iterator instead.
    pub fn run(&self, n_splits: usize) -> Result<EvaluationRun<'_>, ModelError> {
        if n_splits == 0 {
            return Err(ModelError::Config(
                "n_splits must be at least 1".to_string(),
            ));
        }
        let n_samples = self.data.n_samples();
        if n_samples < n_splits {
            return Err(ModelError::Config(format!(
                "n_samples ({}) must be >= n_splits ({})",
                n_samples, n_splits
            )));
        }

        let mut total_support = BTreeMap::new();
        let mut total_scores = BTreeMap::new();
        for name in self.models.keys() {
            total_scores.insert(name.clone(), 0.0);
            total_support.insert(
                name.clone(),
                (0..self.data.n_features()).map(|i| (i, 0.0)).collect(),
            );
        }

        Ok(EvaluationRun {
            evaluator: self,
            bounds: fold_boundaries(n_samples, n_splits),
            n_splits,
            state: RunState::Folding(0),
            total_scores,
            total_support,
        })
    }
}

/// Contiguous fold boundaries over `n_samples` rows: the first
/// `n_samples % n_splits` folds take one extra row.
fn fold_boundaries(n_samples: usize, n_splits: usize) -> Vec<(usize, usize)> {
    let base = n_samples / n_splits;
    let remainder = n_samples % n_splits;
    let mut bounds = Vec::with_capacity(n_splits);
    let mut start = 0;
    for i in 0..n_splits {
        let size = base + usize::from(i < remainder);
        bounds.push((start, start + size));
        start += size;
    }
    bounds
}

enum RunState {
    Folding(usize),
    Aggregating,
    Done,
}

/// The lazy, non-restartable evaluation stream.
///
/// State machine: `Folding(0) → … → Folding(n_splits-1) → Aggregating →
/// Done`, one transition per pull. Any model failure yields the error
/// and jumps straight to `Done`, discarding the in-progress fold and
/// the aggregate.
pub struct EvaluationRun<'a> {
    evaluator: &'a ModelEvaluator,
    bounds: Vec<(usize, usize)>,
    n_splits: usize,
    state: RunState,
    total_scores: BTreeMap<String, f64>,
    total_support: BTreeMap<String, BTreeMap<usize, f64>>,
}

impl EvaluationRun<'_> {
    fn run_fold(&mut self, fold: usize) -> Result<FoldResult, ModelError> {
        let data = &self.evaluator.data;
        let (test_start, test_end) = self.bounds[fold];

        let train_indices: Vec<usize> = (0..data.n_samples())
            .filter(|&i| i < test_start || i >= test_end)
            .collect();
        let test_indices: Vec<usize> = (test_start..test_end).collect();

        let train = data.select(&train_indices);
        let test = data.select(&test_indices);

        log::info!(
            "fold {}/{}: {} training rows, {} test rows",
            fold + 1,
            self.n_splits,
            train.n_samples(),
            test.n_samples()
        );

        let mut scores = BTreeMap::new();
        let mut supports = BTreeMap::new();

        for (name, builder) in &self.evaluator.models {
            let mut model = builder();
            model.fit(&train.x, &train.y)?;

            let fold_score = FoldScore {
                train: model.score(&train.x, &train.y)?,
                test: model.score(&test.x, &test.y)?,
            };
            log::trace!(
                "fold {}: {} train_acc={:.4} test_acc={:.4}",
                fold + 1,
                name,
                fold_score.train,
                fold_score.test
            );

            *self.total_scores.get_mut(name).unwrap() += fold_score.test / self.n_splits as f64;

            let support = model.support().map(|s| s.to_vec());
            if let Some(indices) = &support {
                let frequencies = self.total_support.get_mut(name).unwrap();
                for &index in indices {
                    let slot = frequencies.get_mut(&index).ok_or(
                        ModelError::InvalidSupport {
                            index,
                            n_features: data.n_features(),
                        },
                    )?;
                    *slot += 1.0 / self.n_splits as f64;
                }
            }

            scores.insert(name.clone(), fold_score);
            supports.insert(name.clone(), support);
        }

        Ok(FoldResult { scores, supports })
    }
}

impl Iterator for EvaluationRun<'_> {
    type Item = Result<EvalStep, ModelError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            RunState::Folding(fold) => match self.run_fold(fold) {
                Ok(result) => {
                    self.state = if fold + 1 == self.n_splits {
                        RunState::Aggregating
                    } else {
                        RunState::Folding(fold + 1)
                    };
                    Some(Ok(EvalStep::Fold(result)))
                }
                Err(err) => {
                    self.state = RunState::Done;
                    Some(Err(err))
                }
            },
            RunState::Aggregating => {
                self.state = RunState::Done;
                log::info!("cross validation finished");
                Some(Ok(EvalStep::Aggregate(AggregateResult {
                    mean_test_accuracy: self.total_scores.clone(),
                    feature_frequency: self.total_support.clone(),
                })))
            }
            RunState::Done => None,
        }
    }
}

impl std::iter::FusedIterator for EvaluationRun<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_cover_all_rows_without_overlap() {
        let bounds = fold_boundaries(10, 3);
        assert_eq!(bounds, vec![(0, 4), (4, 7), (7, 10)]);

        let bounds = fold_boundaries(9, 3);
        assert_eq!(bounds, vec![(0, 3), (3, 6), (6, 9)]);
    }

    #[test]
    fn leave_one_out_boundaries() {
        let bounds = fold_boundaries(4, 4);
        assert_eq!(bounds, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn single_split_takes_everything_as_test() {
        assert_eq!(fold_boundaries(5, 1), vec![(0, 5)]);
    }
}
