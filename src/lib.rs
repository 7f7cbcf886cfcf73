//! Caitao: conjunto de datos curado de cerámica pintada neolítica de
//! Shandong.
//!
//! Este crate es la aplicación:
//! - `config`: configuración por entorno con valores por defecto.
//! - `errors`: errores de nivel aplicación.
//! - `pipeline`: arma y ejecuta el flujo de steps.

pub mod config;
pub mod errors;
pub mod pipeline;

pub use config::{AppConfig, CONFIG};
pub use errors::CoreError;
pub use pipeline::{run, RunReport};
