use caitao_domain::{ClassifiedRecord, ShapeTag};
use serde::{Deserialize, Serialize};

use crate::counting::shape_counts;
use crate::trait_dataprovider::DataProvider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Orden canónico de formas para los consumidores del documento.
    pub shapes: Vec<ShapeTag>,
}

/// Formas presentes, de la más frecuente a la menos frecuente.
pub struct ShapeRankingProvider;

impl DataProvider for ShapeRankingProvider {
    type Output = Dimensions;

    fn get_name(&self) -> &str {
        "dimensions"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Ranking de formas por frecuencia"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> Dimensions {
        Dimensions { shapes: shape_counts(items).into_iter().map(|(s, _)| s).collect() }
    }
}
