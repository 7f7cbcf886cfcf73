//! caitao-policies: reglas ordenadas de clasificación y filtrado, y la
//! política de selección del protagonista.
//!
//! Todas las funciones son puras y deterministas.

pub mod filter;
pub mod region;
pub mod shape;
pub mod spotlight;

pub use filter::{is_target, SubsetFilter, TextRule, ERA_RULES, STYLE_RULES};
pub use region::{classify_region, RegionClassifier, RegionRule, REGION_TABLE};
pub use shape::classify_shape;
pub use spotlight::{rank_percentile, MaxClicksPolicy, Rationale, SpotlightDecision, SpotlightPolicy, TieRule};

use caitao_domain::{ArtifactRecord, ClassifiedRecord, TextField, TextFields};

/// Enriquece un registro normalizado con región y forma.
pub fn classify(record: ArtifactRecord) -> ClassifiedRecord {
    let city = classify_region(record.text(TextField::MuseumName));
    let shape = classify_shape(&record.name);
    ClassifiedRecord::new(record, city, shape)
}
