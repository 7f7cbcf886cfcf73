use caitao_domain::{ClassifiedRecord, RegionCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::trait_dataprovider::DataProvider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStat {
    pub city: RegionCode,
    pub count: u64,
    #[serde(rename = "clickCounts")]
    pub click_counts: u64,
}

/// Totales por ciudad, ordenados por etiqueta (orden de code points).
pub struct CityStatsProvider;

impl DataProvider for CityStatsProvider {
    type Output = Vec<CityStat>;

    fn get_name(&self) -> &str {
        "city_stats"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Cantidad de piezas y clicks por ciudad"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> Vec<CityStat> {
        let mut by_label: BTreeMap<&'static str, CityStat> = BTreeMap::new();
        for r in items {
            let stat = by_label.entry(r.city.label()).or_insert(CityStat { city: r.city,
                                                                           count: 0,
                                                                           click_counts: 0 });
            stat.count += 1;
            stat.click_counts += r.click_counts();
        }
        by_label.into_values().collect()
    }
}
