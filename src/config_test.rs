use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = AppConfig::from_lookup(&lookup_from(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.debounce(), Duration::from_millis(750));
    assert!(!cfg.snap_to_grid);
}

#[test]
fn debounce_and_snap_overrides() {
    let cfg = AppConfig::from_lookup(&lookup_from(&[("MINDMAP_DEBOUNCE_MS", "200"), ("MINDMAP_SNAP_TO_GRID", "TRUE")]))
        .unwrap();
    assert_eq!(cfg.debounce_ms, 200);
    assert!(cfg.snap_to_grid);
}

#[test]
fn numeric_boolean_forms_are_accepted() {
    let on = AppConfig::from_lookup(&lookup_from(&[("MINDMAP_SNAP_TO_GRID", "1")])).unwrap();
    let off = AppConfig::from_lookup(&lookup_from(&[("MINDMAP_SNAP_TO_GRID", "0")])).unwrap();
    assert!(on.snap_to_grid);
    assert!(!off.snap_to_grid);
}

#[test]
fn malformed_debounce_falls_back() {
    let cfg = AppConfig::from_lookup(&lookup_from(&[("MINDMAP_DEBOUNCE_MS", "fast")])).unwrap();
    assert_eq!(cfg.debounce_ms, 750);
}

#[test]
fn malformed_boolean_is_config_error() {
    let err = AppConfig::from_lookup(&lookup_from(&[("MINDMAP_SNAP_TO_GRID", "sometimes")])).unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(_)));
    assert!(err.to_string().contains("MINDMAP_SNAP_TO_GRID"));
}

#[test]
fn ollama_settings_flow_through() {
    let cfg = AppConfig::from_lookup(&lookup_from(&[("MINDMAP_MODEL", "phi4:14b")])).unwrap();
    assert_eq!(cfg.llm.model, "phi4:14b");
}

#[test]
fn command_line_overrides_win_over_environment() {
    let overrides = [("MINDMAP_MODEL", Some("llama3:8b".to_owned())), ("MINDMAP_DEBOUNCE_MS", Some("40".to_owned()))];
    let config = AppConfig::from_env(&overrides).unwrap();
    assert_eq!(config.llm.model, "llama3:8b");
    assert_eq!(config.debounce_ms, 40);
}
