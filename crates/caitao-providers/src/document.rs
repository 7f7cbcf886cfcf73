//! Ensamblado del documento agregado completo.
use caitao_domain::ClassifiedRecord;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::all_items::{AllItemsProvider, ListItem};
use crate::city_details::{CityDetails, CityDetailsProvider};
use crate::city_stats::{CityStat, CityStatsProvider};
use crate::name_distribution::{NameDistribution, NameDistributionProvider};
use crate::sankey::{SankeyData, SankeyProvider};
use crate::shape_pivot::{ShapePivot, ShapePivotProvider};
use crate::shape_ranking::{Dimensions, ShapeRankingProvider};
use crate::spotlight::{Protagonist, SpotlightProvider};
use crate::summary::{Summary, SummaryProvider};
use crate::trait_dataprovider::DataProvider;

/// Documento de salida. El orden de los campos es el orden de las claves
/// en el JSON exportado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateDocument {
    pub summary: Summary,
    pub dimensions: Dimensions,
    pub city_stats: Vec<CityStat>,
    pub stats_by_shape: ShapePivot,
    pub name_distribution: NameDistribution,
    pub sankey_data: SankeyData,
    pub city_details: CityDetails,
    pub protagonist: Protagonist,
    pub all_items: Vec<ListItem>,
}

fn run<P: DataProvider>(provider: &P, items: &[ClassifiedRecord]) -> P::Output {
    debug!("provider {} v{}", provider.get_name(), provider.get_version());
    provider.calculate(items)
}

impl AggregateDocument {
    /// Calcula todos los agregados sobre el conjunto de trabajo.
    pub fn build(items: &[ClassifiedRecord]) -> Self {
        if items.is_empty() {
            warn!("conjunto de trabajo vacío: el documento tendrá agregados vacíos");
        }
        Self { summary: run(&SummaryProvider, items),
               dimensions: run(&ShapeRankingProvider, items),
               city_stats: run(&CityStatsProvider, items),
               stats_by_shape: run(&ShapePivotProvider, items),
               name_distribution: run(&NameDistributionProvider, items),
               sankey_data: run(&SankeyProvider, items),
               city_details: run(&CityDetailsProvider, items),
               protagonist: run(&SpotlightProvider::default(), items),
               all_items: run(&AllItemsProvider, items) }
    }
}
