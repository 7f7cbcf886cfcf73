// normalize.rs
//! Relleno de valores por defecto para los campos opcionales.
//!
//! Es la única recuperación que se aplica a datos mal formados: un campo
//! ausente o de tipo incorrecto recibe su valor por defecto y nunca se
//! reporta como error.

use crate::record::{ArtifactRecord, RawRecord};

/// Nombre por defecto ("Unnamed").
pub const UNNAMED: &str = "未命名";
/// Descripción por defecto ("No description").
pub const NO_DESCRIPTION: &str = "暂无描述";
/// Época por defecto ("Era unknown").
pub const ERA_UNKNOWN: &str = "年代不详";

/// Claves que el pipeline deriva; una columna de entrada con el mismo nombre
/// se descarta para no duplicarlas en la salida.
pub const DERIVED_KEYS: [&str; 2] = ["city", "shape_type"];

impl RawRecord {
    /// Convierte la fila en un `ArtifactRecord` rellenando ausencias.
    pub fn normalize(self) -> ArtifactRecord {
        let mut extra = self.extra;
        extra.retain(|k, _| !DERIVED_KEYS.contains(&k.as_str()));
        ArtifactRecord { id: self.id,
                         museum_name: self.museum_name,
                         name: self.name.unwrap_or_else(|| UNNAMED.to_string()),
                         description: self.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                         year_name: self.year_name.unwrap_or_else(|| ERA_UNKNOWN.to_string()),
                         click_counts: self.click_counts.unwrap_or(0),
                         img_url: self.img_url,
                         extra }
    }
}

// Vuelta atrás sin pérdida: re-normalizar un registro ya normalizado es
// un no-op.
impl From<ArtifactRecord> for RawRecord {
    fn from(r: ArtifactRecord) -> Self {
        RawRecord { id: r.id,
                    museum_name: r.museum_name,
                    name: Some(r.name),
                    description: Some(r.description),
                    year_name: Some(r.year_name),
                    click_counts: Some(r.click_counts),
                    img_url: r.img_url,
                    extra: r.extra }
    }
}

/// Normaliza un lote completo conservando el orden de entrada.
pub fn normalize_all<I>(rows: I) -> Vec<ArtifactRecord>
    where I: IntoIterator<Item = RawRecord>
{
    rows.into_iter().map(RawRecord::normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fills_every_absent_field() {
        let r = RawRecord::default().normalize();
        assert_eq!(r.name, UNNAMED);
        assert_eq!(r.description, NO_DESCRIPTION);
        assert_eq!(r.year_name, ERA_UNKNOWN);
        assert_eq!(r.click_counts, 0);
        assert_eq!(r.museum_name, None);
        assert_eq!(r.img_url, None);
    }

    #[test]
    fn keeps_present_values() {
        let raw = RawRecord { name: Some("彩陶罐".into()),
                              click_counts: Some(9),
                              ..Default::default() };
        let r = raw.normalize();
        assert_eq!(r.name, "彩陶罐");
        assert_eq!(r.click_counts, 9);
    }

    #[test]
    fn renormalizing_is_a_noop() {
        let raw: RawRecord = serde_json::from_value(json!({
            "name": "彩陶壶",
            "museumName": "潍坊市博物馆",
            "extra_col": 1
        })).unwrap();
        let once = raw.normalize();
        let twice = RawRecord::from(once.clone()).normalize();
        assert_eq!(once, twice);
    }

    #[test]
    fn derived_keys_from_input_are_dropped() {
        let raw: RawRecord = serde_json::from_value(json!({ "city": "北京", "shape_type": "x", "k": 2 })).unwrap();
        let r = raw.normalize();
        assert!(!r.extra.contains_key("city"));
        assert!(!r.extra.contains_key("shape_type"));
        assert_eq!(r.extra.get("k"), Some(&json!(2)));
    }
}
