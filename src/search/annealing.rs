//! Simulated-annealing search over feature subsets.
//!
//! Neighbors are generated by independently adding one feature from the
//! complement and removing one feature from the current subset, either
//! step optionally a no-op. The temperature schedule is `T = k / K`,
//! which rises with the iteration count instead of cooling, so the
//! acceptance probability for worse candidates grows over the run
//! rather than decaying as in canonical annealing. That schedule is
//! part of this strategy's contract and is kept deliberately.
use std::collections::BTreeSet;

use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::AnnealingConfig;
use crate::data_handling::make_rng;
use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::SupportModelBuilder;
use crate::search::SearchStrategy;

pub struct SimulatedAnnealingSearch {
    builder: SupportModelBuilder,
    config: AnnealingConfig,
}

impl SimulatedAnnealingSearch {
    pub fn new(builder: SupportModelBuilder, config: AnnealingConfig) -> Self {
        Self { builder, config }
    }

    /// Combined fitness: accuracy plus a soft preference for smaller
    /// subsets, worth at most 0.1.
    fn energy(
        model: &dyn ClassifierModel,
        x: &Array2<i32>,
        y: &Array1<i32>,
        n_features: usize,
    ) -> Result<f64, ModelError> {
        let support_len = model.support().map_or(n_features, |s| s.len());
        let accuracy = model.score(x, y)?;
        Ok(accuracy + 0.1 * (n_features as f64 - support_len as f64) / n_features as f64)
    }
}

impl SearchStrategy for SimulatedAnnealingSearch {
    fn search(
        &self,
        x: &Array2<i32>,
        y: &Array1<i32>,
    ) -> Result<Box<dyn ClassifierModel>, ModelError> {
        let n_features = x.ncols();
        if n_features < 2 {
            return Err(ModelError::Config(format!(
                "annealing search needs at least 2 features, got {}",
                n_features
            )));
        }

        let mut rng = make_rng(self.config.seed);

        // initial subset: uniformly random, non-empty, strictly below
        // the full feature count
        let size = rng.gen_range(1..n_features);
        let mut pool: Vec<usize> = (0..n_features).collect();
        pool.shuffle(&mut rng);
        let mut current_set: BTreeSet<usize> = pool[..size].iter().copied().collect();

        let mut state = (self.builder)(current_set.iter().copied().collect());
        state.fit(x, y)?;
        let mut state_energy = Self::energy(state.as_ref(), x, y, n_features)?;
        log::trace!(
            "annealing start: |support|={}, energy={:.4}",
            current_set.len(),
            state_energy
        );

        for k in 1..self.config.iterations {
            let t = k as f64 / self.config.iterations as f64;

            // choose a neighbor: optional addition, optional removal,
            // decided independently
            let mut candidate_set = current_set.clone();

            let complement: Vec<usize> =
                (0..n_features).filter(|i| !current_set.contains(i)).collect();
            let addition = rng.gen_range(0..=complement.len());
            if addition < complement.len() {
                candidate_set.insert(complement[addition]);
            }

            // The removal position is drawn over the searcher's set but
            // resolved against the fitted model's reported support; when
            // the two diverge an out-of-range position, or a feature
            // missing from the candidate copy, makes this a no-op.
            let removal = rng.gen_range(0..=current_set.len());
            if removal < current_set.len() {
                let resolved = match state.support() {
                    Some(support) => support.get(removal).copied(),
                    None => current_set.iter().copied().nth(removal),
                };
                if let Some(feature) = resolved {
                    candidate_set.remove(&feature);
                }
            }

            let mut candidate = (self.builder)(candidate_set.iter().copied().collect());
            candidate.fit(x, y)?;
            let candidate_energy = Self::energy(candidate.as_ref(), x, y, n_features)?;

            // Metropolis rule; with the rising schedule the acceptance
            // probability for worse candidates does not decay over time
            let accept = candidate_energy > state_energy
                || rng.gen::<f64>() < ((candidate_energy - state_energy) / t).exp();
            if accept {
                log::trace!(
                    "annealing k={}: accepted |support|={}, energy {:.4} -> {:.4}",
                    k,
                    candidate_set.len(),
                    state_energy,
                    candidate_energy
                );
                state = candidate;
                current_set = candidate_set;
                state_energy = candidate_energy;
            }
        }

        Ok(state)
    }
}
