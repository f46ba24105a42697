//! subset-search: feature-subset search strategies with cross-validated
//! model evaluation.
//!
//! This crate provides pluggable search strategies for discovering good
//! feature subsets for binary classifiers (simulated annealing, an
//! exhaustive sweep over a rank parameter, and an adapter for third-party
//! genetic optimizers), a pipeline that exposes any search strategy as a
//! classifier in its own right, and a streaming k-fold cross-validation
//! evaluator that compares named model variants while tracking per-feature
//! selection frequency across folds.
//!
//! Concrete classifiers stay behind the `ClassifierModel` trait so the
//! evaluator and the searchers can be tested and reused independently of
//! any particular model backend.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod evaluator;
pub mod feature_selection;
pub mod models;
pub mod search;
