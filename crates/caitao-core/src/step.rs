//! Steps: la unidad de trabajo del motor.
//!
//! `TypedStep` es la interfaz que implementa el pipeline, con tipos de
//! entrada y salida concretos. El motor sólo conoce `Step`, la vista
//! neutral sobre `Artifact`; todo `TypedStep` la implementa.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::artifact::{Artifact, ArtifactSpec};
use crate::errors::CoreEngineError;
use crate::hashing::hash_value;

/// Entrada de una `Source`: nunca se decodifica.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoInput {}

impl ArtifactSpec for NoInput {
    const KIND: &'static str = "none";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepKind {
    /// Produce el primer artifact; no recibe entrada.
    Source,
    Transform,
    /// Último eslabón: produce efectos fuera del motor.
    Sink,
}

pub trait TypedStep {
    type Input: ArtifactSpec;
    type Output: ArtifactSpec;
    /// Parámetros efectivos. Entran al fingerprint, así que deben
    /// describir por completo lo que el step hace con su entrada.
    type Params: Serialize;

    fn id(&self) -> &'static str;

    fn kind(&self) -> StepKind;

    fn params(&self) -> Self::Params;

    /// `input` es `None` sólo para una `Source`.
    fn execute(&self, input: Option<Self::Input>) -> Result<Self::Output, CoreEngineError>;
}

/// Vista neutral que usa el motor.
pub trait Step {
    fn id(&self) -> &str;
    fn kind(&self) -> StepKind;
    fn params_value(&self) -> Value;
    /// Hash de id, tipo, parámetros y tipo Rust del step.
    fn definition_hash(&self) -> String;
    fn run(&self, input: Option<&Artifact>) -> Result<Artifact, CoreEngineError>;
}

impl<T: TypedStep> Step for T {
    fn id(&self) -> &str {
        TypedStep::id(self)
    }

    fn kind(&self) -> StepKind {
        TypedStep::kind(self)
    }

    fn params_value(&self) -> Value {
        serde_json::to_value(self.params()).unwrap_or(Value::Null)
    }

    fn definition_hash(&self) -> String {
        hash_value(&serde_json::json!({
            "id": TypedStep::id(self),
            "kind": TypedStep::kind(self),
            "params": self.params_value(),
            "type": std::any::type_name::<T>(),
        }))
    }

    fn run(&self, input: Option<&Artifact>) -> Result<Artifact, CoreEngineError> {
        let step = TypedStep::id(self);
        let decode_err = |e: crate::artifact::ArtifactError| CoreEngineError::ArtifactDecode { step: step.to_string(),
                                                                                               reason: e.to_string() };
        let typed = match (TypedStep::kind(self), input) {
            (StepKind::Source, _) => None,
            (_, None) => return Err(CoreEngineError::MissingInput { step: step.to_string() }),
            (_, Some(a)) => Some(T::Input::decode(a).map_err(decode_err)?),
        };
        self.execute(typed)?
            .encode()
            .map_err(|e| CoreEngineError::Internal(format!("{step}: {e}")))
    }
}
