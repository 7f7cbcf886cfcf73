//! AcquireRecordsStep (Source)
//!
//! - Lee las filas de `input` (hoja de cálculo o arreglo JSON, según la
//!   extensión).
//! - Normaliza cada fila (valores por defecto) y emite un único
//!   `RecordsArtifact` en el orden de entrada.
//! - Un archivo ausente o ilegible hace fallar el step (error fatal).

use caitao_core::{CoreEngineError, NoInput, StepKind, TypedStep};
use caitao_domain::normalize_all;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::artifacts::RecordsArtifact;
use crate::io::read_rows;

/// La ruta entra al fingerprint.
#[derive(Clone, Debug, Serialize)]
pub struct AcquireParams {
    pub input: String,
}

#[derive(Clone, Debug)]
pub struct AcquireRecordsStep {
    input: PathBuf,
}

impl AcquireRecordsStep {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into() }
    }
}

impl TypedStep for AcquireRecordsStep {
    type Input = NoInput;
    type Output = RecordsArtifact;
    type Params = AcquireParams;

    fn id(&self) -> &'static str {
        "acquire_records"
    }

    fn kind(&self) -> StepKind {
        StepKind::Source
    }

    fn params(&self) -> AcquireParams {
        AcquireParams { input: self.input.display().to_string() }
    }

    fn execute(&self, _input: Option<NoInput>) -> Result<RecordsArtifact, CoreEngineError> {
        let records = normalize_all(read_rows(&self.input)?);
        info!("{} registros cargados de {}", records.len(), self.input.display());
        Ok(RecordsArtifact { source: self.input.display().to_string(),
                             records })
    }
}
