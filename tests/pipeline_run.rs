use caitao_rust::{run, AppConfig, CoreError};
use serde_json::Value;

const ROWS: &str = r#"[
  {"id": 10, "museumName": "临沂市博物馆", "name": "彩陶盆", "description": "彩绘几何纹", "yearName": "大汶口文化中期", "clickCounts": 8, "imgUrl": "a.jpg", "collection": "一级"},
  {"id": 11, "museumName": "兰陵县博物馆", "name": "彩陶盆", "yearName": "大汶口文化", "clickCounts": 3},
  {"id": 12, "museumName": "莒县博物馆", "name": "彩陶背壶", "yearName": "大汶口文化", "clickCounts": 21},
  {"id": 13, "museumName": "临沂市博物馆", "name": "彩陶盆", "yearName": "新石器时代", "clickCounts": 2},
  {"id": 14, "museumName": "山东博物馆", "name": "蛋壳黑陶高柄杯", "yearName": "龙山文化", "clickCounts": 500}
]"#;

fn config(dir: &std::path::Path) -> AppConfig {
    AppConfig { input: dir.join("rows.json"),
                output: dir.join("data.json"),
                log_filter: "info".into() }
}

#[test]
fn run_writes_dashboard_document() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    std::fs::write(&cfg.input, ROWS).unwrap();

    let report = run(&cfg).expect("run ok");
    assert_eq!(report.working_set, 4);
    assert_eq!(report.discarded, 1);
    assert!(!report.flow_fingerprint.is_empty());

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&cfg.output).unwrap()).unwrap();
    assert_eq!(doc["dimensions"]["shapes"], serde_json::json!(["盆", "壶"]));
    assert_eq!(doc["name_distribution"]["彩陶盆"], serde_json::json!(["临沂市", "临沂市", "临沂市"]));
    assert_eq!(doc["stats_by_shape"]["日照市"], serde_json::json!({"壶": 1, "盆": 0}));
    assert_eq!(doc["sankey_data"]["nodes"],
               serde_json::json!([{"name": "临沂市"}, {"name": "日照市"}, {"name": "盆"}, {"name": "壶"}]));
    assert_eq!(doc["city_details"]["临沂市"]["shape_distribution"], serde_json::json!([["盆", 3]]));
    // columnas extra de la fila original se conservan en el protagonista
    assert_eq!(doc["protagonist"]["info"]["id"], 12);
    assert_eq!(doc["protagonist"]["stats"]["rank_percentile"], 1.0);
    assert_eq!(doc["all_items"][1]["collection"], Value::Null);
    assert_eq!(report.receipt.bytes, std::fs::metadata(&cfg.output).unwrap().len());
}

#[test]
fn extra_columns_reach_the_protagonist() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    std::fs::write(&cfg.input,
                   r#"[{"museumName": "泰安市博物馆", "name": "彩陶鼎", "yearName": "大汶口文化", "clickCounts": 4, "collection": "一级"}]"#).unwrap();
    run(&cfg).unwrap();
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&cfg.output).unwrap()).unwrap();
    assert_eq!(doc["protagonist"]["info"]["collection"], "一级");
    assert_eq!(doc["protagonist"]["info"]["shape_type"], "鼎");
    assert_eq!(doc["protagonist"]["stats"]["type_rarity"], "1/1");
}

#[test]
fn missing_input_is_fatal_and_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    std::fs::write(&cfg.output, "previo").unwrap();

    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, CoreError::Engine(_)));
    assert!(err.to_string().contains("rows.json"));
    assert_eq!(std::fs::read_to_string(&cfg.output).unwrap(), "previo");
}

fn keys(v: &Value) -> Vec<&str> {
    v.as_object().map(|o| o.keys().map(String::as_str).collect()).unwrap_or_default()
}

#[test]
fn exported_document_keeps_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    std::fs::write(&cfg.input,
                   r#"[
  {"museumName": "青岛市博物馆", "name": "彩陶罐", "yearName": "大汶口文化", "clickCounts": 40, "zeta": "z", "alpha": "a"},
  {"museumName": "济南市博物馆", "name": "彩陶钵", "yearName": "大汶口文化", "clickCounts": 5}
]"#).unwrap();
    run(&cfg).unwrap();
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&cfg.output).unwrap()).unwrap();

    assert_eq!(keys(&doc),
               ["summary", "dimensions", "city_stats", "stats_by_shape", "name_distribution", "sankey_data", "city_details",
                "protagonist", "all_items"]);
    assert_eq!(keys(&doc["city_details"]), ["青岛市", "济南市"]);
    let info = keys(&doc["protagonist"]["info"]);
    let pos = |k: &str| info.iter().position(|x| *x == k).unwrap();
    assert!(pos("zeta") < pos("alpha"), "{info:?}");
}

#[test]
fn invalid_config_is_rejected_before_running() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(dir.path());
    std::fs::write(&cfg.input, ROWS).unwrap();
    cfg.output = cfg.input.clone();

    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
    assert_eq!(std::fs::read_to_string(&cfg.input).unwrap(), ROWS);
}
