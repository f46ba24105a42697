//! Feature selection adapters.
//!
//! This module exposes search strategies as classifiers so the
//! cross-validation evaluator can treat them like any other model.
pub mod pipeline;
