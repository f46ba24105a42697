//! Data structures and helpers for binary-classification datasets.
//!
//! This module defines `Dataset`, the container the evaluator consumes:
//! integer-encoded categorical features plus a binary label per row,
//! with helpers for validation, seeded shuffling, and row selection.
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ModelError;

/// An in-memory binary classification dataset.
///
/// Rows are fixed-length vectors of integer-encoded categorical values;
/// labels are 0/1. Row order carries no meaning beyond the evaluator's
/// one-time shuffle.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<i32>,
    pub y: Array1<i32>,
}

impl Dataset {
    /// Build a dataset, validating shape and label binarity.
    pub fn new(x: Array2<i32>, y: Array1<i32>) -> Result<Self, ModelError> {
        if x.nrows() != y.len() {
            return Err(ModelError::Config(format!(
                "feature rows ({}) and labels ({}) must have equal length",
                x.nrows(),
                y.len()
            )));
        }
        if let Some(bad) = y.iter().find(|&&v| v != 0 && v != 1) {
            return Err(ModelError::Config(format!(
                "labels must be binary (0/1), found {}",
                bad
            )));
        }
        Ok(Dataset { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Return a copy of this dataset with its rows in a fresh random
    /// permutation drawn from `rng`.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Dataset {
        let mut indices: Vec<usize> = (0..self.n_samples()).collect();
        indices.shuffle(rng);
        self.select(&indices)
    }

    /// Rows at `indices`, in order, as a new dataset.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select(Axis(0), indices),
            y: self.y.select(Axis(0), indices),
        }
    }

    pub fn log_summary(&self) {
        log::info!(
            "dataset: {} rows, {} features, {} positive / {} negative labels",
            self.n_samples(),
            self.n_features(),
            self.y.iter().filter(|&&v| v == 1).count(),
            self.y.iter().filter(|&&v| v == 0).count()
        );
    }
}

/// RNG used across the crate: seeded for reproducibility when a seed is
/// given, otherwise drawn from entropy.
pub(crate) fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn new_rejects_mismatched_lengths() {
        let x = arr2(&[[1, 0], [0, 1], [1, 1]]);
        let y = arr1(&[1, 0]);
        assert!(Dataset::new(x, y).is_err());
    }

    #[test]
    fn new_rejects_non_binary_labels() {
        let x = arr2(&[[1, 0], [0, 1]]);
        let y = arr1(&[1, 2]);
        assert!(Dataset::new(x, y).is_err());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let x = arr2(&[[0, 0], [1, 1], [2, 2], [3, 3]]);
        let y = arr1(&[0, 1, 0, 1]);
        let data = Dataset::new(x, y).unwrap();

        let mut rng = make_rng(Some(7));
        let shuffled = data.shuffled(&mut rng);

        assert_eq!(shuffled.n_samples(), 4);
        // every original row survives, and labels stay aligned with rows
        for row in 0..4 {
            let v = shuffled.x[[row, 0]];
            assert_eq!(shuffled.x[[row, 1]], v);
            assert_eq!(shuffled.y[row], v % 2);
        }
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let x = arr2(&[[0, 0], [1, 1], [2, 2], [3, 3], [4, 4], [5, 5]]);
        let y = arr1(&[0, 1, 0, 1, 0, 1]);
        let data = Dataset::new(x, y).unwrap();

        let a = data.shuffled(&mut make_rng(Some(99)));
        let b = data.shuffled(&mut make_rng(Some(99)));
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
    }
}
