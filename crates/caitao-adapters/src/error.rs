use caitao_core::CoreEngineError;
use caitao_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errores de los adaptadores de entrada/salida. Son siempre fatales.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("No se pudo leer {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Hoja de cálculo ilegible {path}: {source}")]
    Sheet { path: PathBuf, source: calamine::Error },
    #[error("{path} no contiene ninguna hoja")]
    EmptyWorkbook { path: PathBuf },
    #[error("No se pudo escribir {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("Entrada inválida: {0}")]
    Domain(#[from] DomainError),
    #[error("Error de serialización: {0}")]
    Json(#[from] serde_json::Error),
}

// Los steps reportan el fallo al engine con el mensaje del adaptador.
impl From<AdapterError> for CoreEngineError {
    fn from(e: AdapterError) -> Self {
        CoreEngineError::Internal(e.to_string())
    }
}
