//! Artifacts que fluyen entre los steps del pipeline.

use caitao_core::ArtifactSpec;
use caitao_domain::{ArtifactRecord, ClassifiedRecord};
use caitao_providers::AggregateDocument;
use serde::{Deserialize, Serialize};

/// Filas normalizadas, en orden de entrada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsArtifact {
    pub source: String,
    pub records: Vec<ArtifactRecord>,
}

impl ArtifactSpec for RecordsArtifact {
    const KIND: &'static str = "records";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedArtifact {
    pub records: Vec<ClassifiedRecord>,
}

impl ArtifactSpec for ClassifiedArtifact {
    const KIND: &'static str = "classified_records";
}

/// Conjunto de trabajo y cantidad de filas que el filtro descartó.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingSetArtifact {
    pub records: Vec<ClassifiedRecord>,
    pub discarded: usize,
}

impl ArtifactSpec for WorkingSetArtifact {
    const KIND: &'static str = "working_set";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentArtifact {
    pub document: AggregateDocument,
}

impl ArtifactSpec for DocumentArtifact {
    const KIND: &'static str = "aggregate_document";
}

/// Comprobante de escritura: ruta, tamaño y SHA-256 de los bytes escritos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}

impl ArtifactSpec for ExportReceipt {
    const KIND: &'static str = "export_receipt";
}
