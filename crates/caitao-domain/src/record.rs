// record.rs
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::{RegionCode, ShapeTag};

/// Identificador de una fila: la exportación tabular lo trae numérico o
/// como texto según la hoja de origen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{i}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Campos de texto sobre los que operan las reglas de clasificación y
/// filtrado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextField {
    MuseumName,
    Name,
    Description,
    YearName,
}

/// Acceso uniforme a los campos de texto de un registro. `None` significa
/// ausente; las reglas lo tratan como "no contiene".
pub trait TextFields {
    fn text(&self, field: TextField) -> Option<&str>;
}

/// Fila tal como la entrega el adaptador de entrada.
///
/// Todo es opcional: un valor de tipo incorrecto se trata igual que uno
/// ausente (se recupera luego con los valores por defecto del normalizador).
/// Las columnas no reconocidas se conservan en `extra`, en su orden original.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    #[serde(rename = "museumName", default, deserialize_with = "lenient::text")]
    pub museum_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "yearName", default, deserialize_with = "lenient::text")]
    pub year_name: Option<String>,
    #[serde(rename = "clickCounts", default, deserialize_with = "lenient::count")]
    pub click_counts: Option<u64>,
    #[serde(rename = "imgUrl", default, deserialize_with = "lenient::text")]
    pub img_url: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TextFields for RawRecord {
    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::MuseumName => self.museum_name.as_deref(),
            TextField::Name => self.name.as_deref(),
            TextField::Description => self.description.as_deref(),
            TextField::YearName => self.year_name.as_deref(),
        }
    }
}

/// Registro normalizado: los campos opcionales con valor por defecto ya
/// están rellenos (ver `normalize`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub id: Option<RecordId>,
    #[serde(rename = "museumName")]
    pub museum_name: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(rename = "yearName")]
    pub year_name: String,
    #[serde(rename = "clickCounts")]
    pub click_counts: u64,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TextFields for ArtifactRecord {
    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::MuseumName => self.museum_name.as_deref(),
            TextField::Name => Some(&self.name),
            TextField::Description => Some(&self.description),
            TextField::YearName => Some(&self.year_name),
        }
    }
}

/// Registro enriquecido con región y forma. Ambas clasificaciones son
/// totales: nunca quedan indefinidas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: ArtifactRecord,
    pub city: RegionCode,
    pub shape_type: ShapeTag,
}

impl ClassifiedRecord {
    pub fn new(record: ArtifactRecord, city: RegionCode, shape_type: ShapeTag) -> Self {
        Self { record, city, shape_type }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn click_counts(&self) -> u64 {
        self.record.click_counts
    }
}

impl TextFields for ClassifiedRecord {
    fn text(&self, field: TextField) -> Option<&str> {
        self.record.text(field)
    }
}

/// Deserializadores tolerantes: cualquier tipo inesperado se convierte en
/// `None` en lugar de abortar la lectura de la fila.
mod lenient {
    use super::*;

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RecordId>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(RecordId::Int(i)),
                // ids flotantes enteros (12.0) llegan así desde hojas de cálculo
                None => n.as_f64()
                         .filter(|f| f.is_finite() && f.fract() == 0.0)
                         .map(|f| RecordId::Int(f as i64)),
            },
            Value::String(s) if !s.is_empty() => Some(RecordId::Text(s)),
            _ => None,
        })
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(non_negative)),
            Value::String(s) => s.trim().parse::<f64>().ok().and_then(non_negative),
            _ => None,
        })
    }

    // Los clics son un conteo: la parte fraccionaria se descarta.
    fn non_negative(f: f64) -> Option<u64> {
        if f.is_finite() && f >= 0.0 {
            Some(f.trunc() as u64)
        } else {
            None
        }
    }
}
