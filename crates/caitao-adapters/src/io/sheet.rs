//! Lectura de la exportación del catálogo en formato hoja de cálculo.
//!
//! Se lee la primera hoja. La primera fila es el encabezado; cada fila
//! siguiente se convierte en un objeto JSON con esas claves y luego en un
//! `RawRecord`, igual que una fila de la exportación JSON. Las celdas
//! vacías o con error quedan como `null`.

use caitao_domain::RawRecord;
use calamine::{open_workbook_auto, Data, Range, Reader};
use serde_json::{Map, Number, Value};
use std::path::Path;

use crate::error::AdapterError;

pub const SHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SHEET_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(e)))
}

/// # Errores
/// `AdapterError::Sheet` si el libro no se puede abrir o la hoja no se
/// puede leer; `AdapterError::EmptyWorkbook` si no tiene hojas.
pub fn read_sheet(path: &Path) -> Result<Vec<RawRecord>, AdapterError> {
    let sheet_err = |source: calamine::Error| AdapterError::Sheet { path: path.to_path_buf(),
                                                                    source };
    let mut workbook = open_workbook_auto(path).map_err(sheet_err)?;
    let range = workbook.worksheet_range_at(0)
                        .ok_or_else(|| AdapterError::EmptyWorkbook { path: path.to_path_buf() })?
                        .map_err(sheet_err)?;
    rows_from_range(&range)
}

/// Convierte una hoja (encabezado + filas) en registros crudos. Las filas
/// completamente vacías se ignoran.
pub fn rows_from_range(range: &Range<Data>) -> Result<Vec<RawRecord>, AdapterError> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let keys: Vec<String> = header.iter().map(header_key).collect();
    let table: Vec<Value> = rows.filter(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
                                .map(|row| {
                                    let obj: Map<String, Value> = keys.iter()
                                                                      .zip(row)
                                                                      .filter(|(k, _)| !k.is_empty())
                                                                      .map(|(k, c)| (k.clone(), cell_value(c)))
                                                                      .collect();
                                    Value::Object(obj)
                                })
                                .collect();
    Ok(serde_json::from_value(Value::Array(table))?)
}

fn header_key(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> Value {
    let number = |f: f64| Number::from_f64(f).map_or(Value::Null, Value::Number);
    match cell {
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => number(*f),
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caitao_domain::RecordId;

    fn catalog() -> Range<Data> {
        let mut r = Range::new((0, 0), (3, 4));
        for (col, key) in ["id", "museumName", "name", "clickCounts", "collection"].iter().enumerate() {
            r.set_value((0, col as u32), Data::String(key.to_string()));
        }
        r.set_value((1, 0), Data::Float(12.0));
        r.set_value((1, 1), Data::String("潍坊市博物馆".into()));
        r.set_value((1, 2), Data::String("彩陶鬶".into()));
        r.set_value((1, 3), Data::Float(30.0));
        r.set_value((1, 4), Data::String("一级".into()));
        // fila 2 vacía
        r.set_value((3, 0), Data::Int(13));
        r.set_value((3, 2), Data::String("彩陶壶".into()));
        r
    }

    #[test]
    fn header_row_becomes_record_keys() {
        let rows = rows_from_range(&catalog()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, Some(RecordId::Int(12)));
        assert_eq!(rows[0].museum_name.as_deref(), Some("潍坊市博物馆"));
        assert_eq!(rows[0].click_counts, Some(30));
        assert_eq!(rows[0].extra.get("collection"), Some(&Value::String("一级".into())));
        assert_eq!(rows[1].id, Some(RecordId::Int(13)));
        assert_eq!(rows[1].museum_name, None);
        assert_eq!(rows[1].click_counts, None);
    }

    #[test]
    fn empty_sheet_has_no_rows() {
        assert!(rows_from_range(&Range::<Data>::empty()).unwrap().is_empty());
    }

    #[test]
    fn extension_selects_format() {
        assert!(is_spreadsheet(Path::new("山东省博物馆彩陶信息.xlsx")));
        assert!(is_spreadsheet(Path::new("a.XLS")));
        assert!(!is_spreadsheet(Path::new("rows.json")));
        assert!(!is_spreadsheet(Path::new("sin_extension")));
    }
}
