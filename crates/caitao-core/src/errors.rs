//! Errores del motor de ejecución.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error de una ejecución. Se guarda tal cual dentro del evento
/// `StepFailed`, por eso es serializable y comparable.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    #[error("la ejecución ya terminó")]
    RunFinished,
    #[error("la ejecución quedó detenida por un step fallido")]
    RunHalted,
    #[error("el primer step debe ser una fuente")]
    FirstStepMustBeSource,
    #[error("el step '{step}' no recibió entrada")]
    MissingInput { step: String },
    #[error("artifact ilegible en '{step}': {reason}")]
    ArtifactDecode { step: String, reason: String },
    #[error("{0}")]
    Internal(String),
}
