use caitao_domain::ClassifiedRecord;
use caitao_policies::{rank_percentile, MaxClicksPolicy, SpotlightPolicy};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::trait_dataprovider::DataProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotlightStats {
    /// NaN si el conjunto está vacío (se exporta como `null`).
    #[serde(deserialize_with = "nan_when_null")]
    pub rank_percentile: f64,
    /// `"k/n"`: piezas con la misma forma sobre el total.
    pub type_rarity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protagonist {
    pub info: Option<ClassifiedRecord>,
    pub stats: SpotlightStats,
}

fn nan_when_null<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
}

/// Protagonista: la pieza elegida por la política y sus estadísticas.
pub struct SpotlightProvider<P: SpotlightPolicy = MaxClicksPolicy> {
    policy: P,
}

impl Default for SpotlightProvider<MaxClicksPolicy> {
    fn default() -> Self {
        Self { policy: MaxClicksPolicy::new() }
    }
}

impl<P: SpotlightPolicy> SpotlightProvider<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }
}

impl<P: SpotlightPolicy + Send + Sync> DataProvider for SpotlightProvider<P> {
    type Output = Protagonist;

    fn get_name(&self) -> &str {
        "protagonist"
    }
    fn get_version(&self) -> &str {
        "0.1.0"
    }
    fn get_description(&self) -> &str {
        "Pieza destacada, percentil y rareza de su forma"
    }

    fn calculate(&self, items: &[ClassifiedRecord]) -> Protagonist {
        let n = items.len();
        let Some(decision) = self.policy.choose(items) else {
            return Protagonist { info: None,
                                 stats: SpotlightStats { rank_percentile: f64::NAN,
                                                         type_rarity: format!("0/{n}") } };
        };
        debug!("protagonista elegido por {}: índice {} (empates: {:?}, rationale {})",
               decision.policy_id,
               decision.selected_index,
               decision.rationale.ties,
               decision.rationale.digest());

        let chosen = &items[decision.selected_index];
        let clicks: Vec<u64> = items.iter().map(ClassifiedRecord::click_counts).collect();
        let same_shape = items.iter().filter(|r| r.shape_type == chosen.shape_type).count();
        Protagonist { info: Some(chosen.clone()),
                      stats: SpotlightStats { rank_percentile: rank_percentile(&clicks, chosen.click_counts()),
                                              type_rarity: format!("{same_shape}/{n}") } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rec;
    use caitao_domain::{RegionCode, ShapeTag};

    #[test]
    fn spotlight_stats() {
        let items = vec![rec("a", RegionCode::Jinan, ShapeTag::Guan, 5),
                         rec("b", RegionCode::Heze, ShapeTag::Hu, 9),
                         rec("c", RegionCode::Jinan, ShapeTag::Hu, 9),
                         rec("d", RegionCode::Jinan, ShapeTag::Guan, 1)];
        let p = SpotlightProvider::default().calculate(&items);
        assert_eq!(p.info.as_ref().map(|r| r.name()), Some("b"));
        assert_eq!(p.stats.type_rarity, "2/4");
        assert_eq!(p.stats.rank_percentile, 0.875);
    }

    #[test]
    fn empty_set_renders_null_percentile() {
        let p = SpotlightProvider::default().calculate(&[]);
        assert!(p.info.is_none());
        assert!(p.stats.rank_percentile.is_nan());
        assert_eq!(p.stats.type_rarity, "0/0");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v, serde_json::json!({"info": null, "stats": {"rank_percentile": null, "type_rarity": "0/0"}}));
        let back: Protagonist = serde_json::from_value(v).unwrap();
        assert!(back.stats.rank_percentile.is_nan());
    }
}
