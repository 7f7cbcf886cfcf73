use caitao_domain::ClassifiedRecord;
use std::collections::{BTreeMap, BTreeSet};

use crate::trait_dataprovider::DataProvider;

/// Filas: ciudades presentes. Columnas: formas presentes. Celdas: conteo.
pub type ShapePivot = BTreeMap<String, BTreeMap<String, u64>>;

/// Tabla cruzada ciudad × forma, rellena con ceros.
pub struct ShapePivotProvider;

impl DataProvider for ShapePivotProvider {
    type Output = ShapePivot;

    fn get_name(&self) -> &str {
        "stats_by_shape"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Conteo de formas por ciudad"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> ShapePivot {
        let shapes: BTreeSet<&'static str> = items.iter().map(|r| r.shape_type.label()).collect();
        let mut pivot = ShapePivot::new();
        for r in items {
            let row = pivot.entry(r.city.label().to_string()).or_insert_with(|| {
                                                                  shapes.iter().map(|s| (s.to_string(), 0)).collect()
                                                              });
            *row.entry(r.shape_type.label().to_string()).or_insert(0) += 1;
        }
        pivot
    }
}
