//! Errores específicos del core (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SetupError {
    #[error("run already completed")] RunCompleted,
    #[error("run has failed previously (stop-on-failure invariant)")] RunHasFailed,
    #[error("step {step}: {reason}")] StepFailed { step: String, reason: String },
    #[error("internal: {0}")] Internal(String),
}
