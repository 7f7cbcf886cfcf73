use caitao_domain::{ClassifiedRecord, RegionCode};
use std::collections::BTreeMap;

use crate::trait_dataprovider::DataProvider;

pub type NameDistribution = BTreeMap<String, Vec<RegionCode>>;

/// Para cada nombre, las ciudades donde aparece: una entrada por
/// ocurrencia, en orden de aparición, sin deduplicar.
pub struct NameDistributionProvider;

impl DataProvider for NameDistributionProvider {
    type Output = NameDistribution;

    fn get_name(&self) -> &str {
        "name_distribution"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Ciudades por nombre de pieza"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> NameDistribution {
        let mut out = NameDistribution::new();
        for r in items {
            out.entry(r.name().to_string()).or_default().push(r.city);
        }
        out
    }
}
