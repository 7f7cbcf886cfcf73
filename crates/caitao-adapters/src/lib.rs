//! caitao-adapters: capa de adaptación entre el dominio, los agregados y
//! el engine.
//!
//! Este crate provee:
//! - Artifacts tipados que fluyen entre steps.
//! - Adaptadores de archivo (lectura de filas, escritura atómica).
//! - La normalización/serialización del documento de salida.
//! - Los cinco steps del pipeline.

pub mod artifacts;
pub mod error;
pub mod export;
pub mod io;
pub mod steps;

pub use error::AdapterError;
