//! ExportDocumentStep (Sink)
//!
//! - Normaliza y serializa el documento (ver `export::render`).
//! - Escribe el archivo de salida de forma atómica.
//! - Emite un `ExportReceipt` con tamaño y SHA-256 de lo escrito.

use caitao_core::{CoreEngineError, StepKind, TypedStep};
use log::info;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::artifacts::{DocumentArtifact, ExportReceipt};
use crate::export::render;
use crate::io::write_atomic;

#[derive(Clone, Debug, Serialize)]
pub struct ExportParams {
    pub output: String,
}

#[derive(Clone, Debug)]
pub struct ExportDocumentStep {
    output: PathBuf,
}

impl ExportDocumentStep {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into() }
    }
}

impl TypedStep for ExportDocumentStep {
    type Input = DocumentArtifact;
    type Output = ExportReceipt;
    type Params = ExportParams;

    fn id(&self) -> &'static str {
        "export_document"
    }

    fn kind(&self) -> StepKind {
        StepKind::Sink
    }

    fn params(&self) -> ExportParams {
        ExportParams { output: self.output.display().to_string() }
    }

    fn execute(&self, input: Option<DocumentArtifact>) -> Result<ExportReceipt, CoreEngineError> {
        let doc = input.ok_or_else(|| CoreEngineError::MissingInput { step: self.id().to_string() })?;
        let text = render(&doc.document)?;
        let bytes = text.as_bytes();
        write_atomic(&self.output, bytes)?;
        let sha256 = format!("{:x}", Sha256::digest(bytes));
        info!("documento escrito en {} ({} bytes, sha256 {})", self.output.display(), bytes.len(), sha256);
        Ok(ExportReceipt { path: self.output.display().to_string(),
                           bytes: bytes.len() as u64,
                           sha256 })
    }
}
