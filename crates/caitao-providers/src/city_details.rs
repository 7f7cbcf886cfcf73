use caitao_domain::{ClassifiedRecord, RegionCode, ShapeTag};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::counting::{shape_counts, total_clicks};
use crate::trait_dataprovider::DataProvider;

/// Proyección de una pieza para la galería de una ciudad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub name: String,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
    #[serde(rename = "clickCounts")]
    pub click_counts: u64,
    pub shape_type: ShapeTag,
    pub description: String,
    #[serde(rename = "museumName")]
    pub museum_name: Option<String>,
}

impl From<&ClassifiedRecord> for GalleryItem {
    fn from(r: &ClassifiedRecord) -> Self {
        Self { name: r.record.name.clone(),
               img_url: r.record.img_url.clone(),
               click_counts: r.record.click_counts,
               shape_type: r.shape_type,
               description: r.record.description.clone(),
               museum_name: r.record.museum_name.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDetail {
    pub items: Vec<GalleryItem>,
    pub shape_distribution: Vec<(ShapeTag, u64)>,
    pub total_count: u64,
    pub total_clicks: u64,
}

pub type CityDetails = IndexMap<RegionCode, CityDetail>;

/// Galería por ciudad, en orden de primera aparición de cada ciudad.
///
/// Cada ciudad se calcula en paralelo; el resultado se reensambla en el
/// orden de agrupación, así que no depende del scheduling.
pub struct CityDetailsProvider;

impl CityDetailsProvider {
    fn detail(records: &[&ClassifiedRecord]) -> CityDetail {
        let mut items: Vec<GalleryItem> = records.iter().map(|r| GalleryItem::from(*r)).collect();
        // sort_by es estable: los empates conservan el orden de entrada
        items.sort_by(|a, b| b.click_counts.cmp(&a.click_counts));
        CityDetail { items,
                     shape_distribution: shape_counts(records.iter().copied()),
                     total_count: records.len() as u64,
                     total_clicks: total_clicks(records.iter().copied()) }
    }
}

impl DataProvider for CityDetailsProvider {
    type Output = CityDetails;

    fn get_name(&self) -> &str {
        "city_details"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Galería, distribución de formas y totales por ciudad"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> CityDetails {
        let mut groups: IndexMap<RegionCode, Vec<&ClassifiedRecord>> = IndexMap::new();
        for r in items {
            groups.entry(r.city).or_default().push(r);
        }
        let groups: Vec<(RegionCode, Vec<&ClassifiedRecord>)> = groups.into_iter().collect();
        let details: Vec<(RegionCode, CityDetail)> = groups.par_iter()
                                                           .map(|(city, recs)| (*city, Self::detail(recs)))
                                                           .collect();
        details.into_iter().collect()
    }
}
