//! Ejecución completa: acquire → classify → filter → aggregate → export.
use caitao_adapters::artifacts::{ExportReceipt, WorkingSetArtifact};
use caitao_adapters::steps::{AcquireRecordsStep, AggregateStep, ClassifyRecordsStep, ExportDocumentStep, FilterWorkingSetStep};
use caitao_core::FlowEngine;
use log::{debug, info};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::CoreError;

/// Resumen de una ejecución exitosa.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub flow_fingerprint: String,
    pub working_set: usize,
    pub discarded: usize,
    pub elapsed_ms: i64,
    pub receipt: ExportReceipt,
}

pub fn build_engine(cfg: &AppConfig) -> FlowEngine {
    FlowEngine::source(AcquireRecordsStep::new(&cfg.input)).then(ClassifyRecordsStep::new())
                                                           .then(FilterWorkingSetStep::new())
                                                           .then(AggregateStep::new())
                                                           .then(ExportDocumentStep::new(&cfg.output))
                                                           .build()
}

/// Ejecuta el pipeline de punta a punta.
///
/// # Errores
/// `CoreError::Config` si la configuración es inválida (nada se ejecuta).
/// `CoreError::Engine` si algún step falla (entrada ilegible, salida no
/// escribible). En ambos casos el archivo de salida no se modifica.
pub fn run(cfg: &AppConfig) -> Result<RunReport, CoreError> {
    cfg.validate()?;
    info!("procesando {} → {}", cfg.input.display(), cfg.output.display());
    let mut engine = build_engine(cfg);
    let run_id = engine.run()?;
    debug!("eventos: {:?}", engine.event_codes());

    let flow_fingerprint = engine.fingerprint()
                                 .map(str::to_string)
                                 .ok_or_else(|| CoreError::Internal("flujo sin fingerprint".into()))?;
    let ws: WorkingSetArtifact = engine.output("filter_working_set")?;
    let receipt: ExportReceipt = engine.output("export_document")?;
    Ok(RunReport { run_id,
                   flow_fingerprint,
                   working_set: ws.records.len(),
                   discarded: ws.discarded,
                   elapsed_ms: engine.log().elapsed().num_milliseconds(),
                   receipt })
}
