use caitao_domain::{ClassifiedRecord, RegionCode, ShapeTag};
use serde::{Deserialize, Serialize};

use crate::trait_dataprovider::DataProvider;

/// Proyección de una pieza para el listado global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub city: RegionCode,
    #[serde(rename = "museumName")]
    pub museum_name: Option<String>,
    #[serde(rename = "clickCounts")]
    pub click_counts: u64,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
    pub description: String,
    pub shape_type: ShapeTag,
    #[serde(rename = "yearName")]
    pub year_name: String,
}

impl From<&ClassifiedRecord> for ListItem {
    fn from(r: &ClassifiedRecord) -> Self {
        Self { name: r.record.name.clone(),
               city: r.city,
               museum_name: r.record.museum_name.clone(),
               click_counts: r.record.click_counts,
               img_url: r.record.img_url.clone(),
               description: r.record.description.clone(),
               shape_type: r.shape_type,
               year_name: r.record.year_name.clone() }
    }
}

/// Todas las piezas del conjunto de trabajo, por clicks descendente (estable).
pub struct AllItemsProvider;

impl DataProvider for AllItemsProvider {
    type Output = Vec<ListItem>;

    fn get_name(&self) -> &str {
        "all_items"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Listado global ordenado por clicks"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> Vec<ListItem> {
        let mut out: Vec<ListItem> = items.iter().map(ListItem::from).collect();
        out.sort_by(|a, b| b.click_counts.cmp(&a.click_counts));
        out
    }
}
