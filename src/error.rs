use std::error::Error;
use std::fmt;

/// Custom error type for search and evaluation failures.
///
/// The core performs no local recovery: every variant aborts the
/// enclosing operation (a single `search` call, a single fold, or the
/// whole evaluator run) and surfaces to the caller unmodified.
#[derive(Debug)]
pub enum ModelError {
    /// Invalid configuration (e.g. `min_n > max_n`, too few features,
    /// mismatched dataset shapes).
    Config(String),
    /// A wrapped classifier's fit failed (e.g. structural learning on a
    /// degenerate support). Never retried or suppressed.
    Fit(String),
    /// `predict`/`score` was called on a model that has not been fitted.
    NotFitted,
    /// A model reported a support index outside `[0, n_features)`.
    InvalidSupport { index: usize, n_features: usize },
    /// Prediction length did not match the number of labels.
    LengthMismatch { predictions: usize, labels: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            ModelError::Fit(msg) => write!(f, "model fit failed: {}", msg),
            ModelError::NotFitted => write!(f, "model has not been fitted"),
            ModelError::InvalidSupport { index, n_features } => write!(
                f,
                "support index {} out of range for {} features",
                index, n_features
            ),
            ModelError::LengthMismatch {
                predictions,
                labels,
            } => write!(
                f,
                "prediction and label vectors must have equal length ({} vs {})",
                predictions, labels
            ),
        }
    }
}

impl Error for ModelError {}
