use caitao_domain::{parse_rows, RawRecord};
use log::debug;
use std::fs;
use std::path::Path;

use crate::error::AdapterError;
use crate::io::sheet::{is_spreadsheet, read_sheet};

/// Lee las filas de la exportación del catálogo.
///
/// Las extensiones de hoja de cálculo (`.xlsx`, `.xls`, `.ods`, ...) se
/// leen con `sheet::read_sheet`; cualquier otra se trata como un arreglo
/// JSON de filas.
///
/// # Errores
/// `AdapterError::Read` / `AdapterError::Sheet` si el archivo no existe o
/// no se puede leer; `AdapterError::Domain` si el JSON no es un arreglo de
/// objetos.
pub fn read_rows(path: &Path) -> Result<Vec<RawRecord>, AdapterError> {
    let rows = if is_spreadsheet(path) { read_sheet(path)? } else { read_json(path)? };
    debug!("{} filas leídas de {}", rows.len(), path.display());
    Ok(rows)
}

fn read_json(path: &Path) -> Result<Vec<RawRecord>, AdapterError> {
    let text = fs::read_to_string(path).map_err(|source| AdapterError::Read { path: path.to_path_buf(),
                                                                              source })?;
    Ok(parse_rows(&text)?)
}
