//! Configuración central de la aplicación.
//!
//! La ejecución no recibe parámetros: todo tiene un valor por defecto que
//! puede sobrescribirse con variables de entorno (opcionalmente desde un
//! `.env`).
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

use crate::errors::CoreError;

/// Archivo de entrada por defecto (exportación del catálogo del museo).
/// También se acepta la misma tabla como arreglo JSON (`.json`).
pub const DEFAULT_INPUT: &str = "山东省博物馆彩陶信息.xlsx";
/// Documento de salida por defecto, consumido por el dashboard.
pub const DEFAULT_OUTPUT: &str = "data.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `CAITAO_INPUT`
    pub input: PathBuf,
    /// `CAITAO_OUTPUT`
    pub output: PathBuf,
    /// `RUST_LOG`
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { input: PathBuf::from(DEFAULT_INPUT),
               output: PathBuf::from(DEFAULT_OUTPUT),
               log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda;
    /// valores vacíos cuentan como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self { input: get("CAITAO_INPUT").map(PathBuf::from).unwrap_or(defaults.input),
               output: get("CAITAO_OUTPUT").map(PathBuf::from).unwrap_or(defaults.output),
               log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter) }
    }

    /// Rechaza configuraciones que sobrescribirían la entrada o que no
    /// apuntan a un archivo de salida.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.output.file_name().is_none() {
            return Err(CoreError::Config(format!("CAITAO_OUTPUT no apunta a un archivo: {}", self.output.display())));
        }
        if self.input == self.output {
            return Err(CoreError::Config(format!("entrada y salida son el mismo archivo: {}", self.input.display())));
        }
        Ok(())
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);
