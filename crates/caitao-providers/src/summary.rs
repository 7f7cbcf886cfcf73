use caitao_domain::ClassifiedRecord;
use serde::{Deserialize, Serialize};

use crate::counting::total_clicks;
use crate::trait_dataprovider::DataProvider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: u64,
    pub total_clicks: u64,
}

/// Totales globales del conjunto de trabajo.
pub struct SummaryProvider;

impl DataProvider for SummaryProvider {
    type Output = Summary;

    fn get_name(&self) -> &str {
        "summary"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Cantidad de piezas y suma de clicks"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> Summary {
        Summary { total_count: items.len() as u64,
                  total_clicks: total_clicks(items) }
    }
}
