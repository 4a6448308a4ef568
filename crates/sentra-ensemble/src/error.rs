use thiserror::Error;

/// Failure surfaced by an external predictive model. The ensemble catches
/// these at the call site and substitutes a fallback score; they never
/// propagate to callers.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not loaded: {0}")]
    NotLoaded(String),

    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("model timed out")]
    Timeout,
}
