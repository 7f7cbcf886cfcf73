use caitao_domain::{normalize_all, parse_rows, RegionCode, ShapeTag};
use caitao_policies::{classify, classify_region, classify_shape, is_target, rank_percentile, REGION_TABLE};
use proptest::prelude::*;

#[test]
fn classify_sets_both_attributes() {
    let rows = parse_rows(r#"[
        {"museumName": "淄博市博物馆", "name": "彩陶钵", "yearName": "大汶口文化"},
        {"name": "陶片"}
    ]"#).unwrap();
    let recs: Vec<_> = normalize_all(rows).into_iter().map(classify).collect();
    assert_eq!(recs[0].city, RegionCode::Zibo);
    assert_eq!(recs[0].shape_type, ShapeTag::Bo);
    assert!(is_target(&recs[0]));
    assert_eq!(recs[1].city, RegionCode::Other);
    assert_eq!(recs[1].shape_type, ShapeTag::Other);
    assert!(!is_target(&recs[1]));
}

proptest! {
    #[test]
    fn region_is_always_in_closed_set(s in "\\PC{0,12}") {
        let r = classify_region(Some(&s));
        prop_assert!(r.is_other() || RegionCode::ALL.contains(&r));
    }

    #[test]
    fn own_label_wins_over_any_fragment(i in 0usize..16, j in 0usize..16, k in 0usize..4, prefix in "[a-z]{0,3}") {
        let own = REGION_TABLE[i].region;
        let other = &REGION_TABLE[j];
        let frag = other.fragments[k % other.fragments.len()];
        let name = format!("{prefix}{frag}{}博物馆", own.label());
        prop_assert_eq!(classify_region(Some(&name)), own);
    }

    #[test]
    fn name_ending_in_glyph_gets_that_shape(idx in 0usize..15, stem in "[a-z陶彩]{0,6}") {
        let tag = ShapeTag::VOCABULARY[idx];
        let name = format!("{stem}{}", tag.label());
        prop_assert_eq!(classify_shape(&name), tag);
    }

    #[test]
    fn percentile_stays_in_unit_interval(values in prop::collection::vec(0u64..50, 1..40), pick in 0usize..40) {
        let v = values[pick % values.len()];
        let p = rank_percentile(&values, v);
        prop_assert!(p > 0.0 && p <= 1.0);
    }
}
