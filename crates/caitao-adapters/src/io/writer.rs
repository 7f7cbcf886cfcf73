use log::debug;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::AdapterError;

/// Escribe `bytes` en `path` de forma atómica: archivo temporal en el mismo
/// directorio y luego rename. Si algo falla, el destino queda intacto.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AdapterError> {
    let write_err = |source: std::io::Error| AdapterError::Write { path: path.to_path_buf(),
                                                                  source };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    debug!("{} bytes escritos en {}", bytes.len(), path.display());
    Ok(())
}
