use caitao_domain::{ArtifactRecord, ClassifiedRecord, RegionCode, ShapeTag};

pub fn rec(name: &str, city: RegionCode, shape: ShapeTag, clicks: u64) -> ClassifiedRecord {
    let r = ArtifactRecord { id: None,
                             museum_name: Some(format!("{}博物馆", city.label())),
                             name: name.into(),
                             description: "彩绘".into(),
                             year_name: "新石器时代".into(),
                             click_counts: clicks,
                             img_url: Some(format!("{name}.jpg")),
                             extra: Default::default() };
    ClassifiedRecord::new(r, city, shape)
}
