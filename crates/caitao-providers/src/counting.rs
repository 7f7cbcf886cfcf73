//! Conteos compartidos por varios providers.
use caitao_domain::{ClassifiedRecord, ShapeTag};
use indexmap::IndexMap;

/// Frecuencia de formas: descendente por cantidad, empates en orden de
/// primera aparición.
pub fn shape_counts<'a, I>(items: I) -> Vec<(ShapeTag, u64)>
    where I: IntoIterator<Item = &'a ClassifiedRecord>
{
    let mut counts: IndexMap<ShapeTag, u64> = IndexMap::new();
    for r in items {
        *counts.entry(r.shape_type).or_insert(0) += 1;
    }
    let mut out: Vec<(ShapeTag, u64)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Suma de clicks.
pub fn total_clicks<'a, I>(items: I) -> u64
    where I: IntoIterator<Item = &'a ClassifiedRecord>
{
    items.into_iter().map(ClassifiedRecord::click_counts).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rec;
    use caitao_domain::RegionCode;

    #[test]
    fn ties_keep_first_encounter() {
        let items = vec![rec("a", RegionCode::Jinan, ShapeTag::Hu, 1),
                         rec("b", RegionCode::Jinan, ShapeTag::Guan, 1),
                         rec("c", RegionCode::Jinan, ShapeTag::Guan, 1),
                         rec("d", RegionCode::Jinan, ShapeTag::Pen, 1),
                         rec("e", RegionCode::Jinan, ShapeTag::Hu, 1)];
        assert_eq!(shape_counts(&items),
                   vec![(ShapeTag::Hu, 2), (ShapeTag::Guan, 2), (ShapeTag::Pen, 1)]);
        assert_eq!(total_clicks(&items), 5);
    }
}
