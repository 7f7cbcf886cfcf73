use caitao_domain::{ClassifiedRecord, RegionCode, ShapeTag};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::trait_dataprovider::DataProvider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyLink {
    pub source: RegionCode,
    pub target: ShapeTag,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyData {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

/// Flujo ciudad → forma.
///
/// Nodos: ciudades distintas y luego formas distintas, cada grupo en orden
/// de primera aparición. Una etiqueta compartida (`其他`) aparece dos veces.
/// Enlaces: un par (ciudad, forma) presente por enlace, ordenados por
/// etiquetas.
pub struct SankeyProvider;

impl DataProvider for SankeyProvider {
    type Output = SankeyData;

    fn get_name(&self) -> &str {
        "sankey_data"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Nodos y enlaces ciudad→forma"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> SankeyData {
        let cities: IndexSet<RegionCode> = items.iter().map(|r| r.city).collect();
        let shapes: IndexSet<ShapeTag> = items.iter().map(|r| r.shape_type).collect();
        let nodes = cities.iter()
                          .map(|c| c.label())
                          .chain(shapes.iter().map(|s| s.label()))
                          .map(|name| SankeyNode { name: name.to_string() })
                          .collect();

        let mut pairs: BTreeMap<(&'static str, &'static str), SankeyLink> = BTreeMap::new();
        for r in items {
            pairs.entry((r.city.label(), r.shape_type.label()))
                 .or_insert(SankeyLink { source: r.city,
                                         target: r.shape_type,
                                         value: 0 })
                 .value += 1;
        }
        SankeyData { nodes,
                     links: pairs.into_values().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rec;

    #[test]
    fn shared_other_label_is_not_merged() {
        let items = vec![rec("a", RegionCode::Other, ShapeTag::Guan, 1),
                         rec("b", RegionCode::Jinan, ShapeTag::Other, 1)];
        let s = SankeyProvider.calculate(&items);
        let names: Vec<&str> = s.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["其他", "济南市", "罐", "其他"]);
    }

    #[test]
    fn links_are_sorted_by_labels_and_counted() {
        let items = vec![rec("a", RegionCode::Qingdao, ShapeTag::Hu, 1),
                         rec("b", RegionCode::Jinan, ShapeTag::Hu, 1),
                         rec("c", RegionCode::Jinan, ShapeTag::Guan, 1),
                         rec("d", RegionCode::Jinan, ShapeTag::Hu, 1)];
        let s = SankeyProvider.calculate(&items);
        let links: Vec<(RegionCode, ShapeTag, u64)> = s.links.iter().map(|l| (l.source, l.target, l.value)).collect();
        // 壶 (U+58F6) < 罐 (U+7F50)
        assert_eq!(links,
                   vec![(RegionCode::Jinan, ShapeTag::Hu, 2),
                        (RegionCode::Jinan, ShapeTag::Guan, 1),
                        (RegionCode::Qingdao, ShapeTag::Hu, 1)]);
    }
}
