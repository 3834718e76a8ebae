use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = OllamaConfig::from_lookup(&lookup_from(&[])).unwrap();
    assert_eq!(cfg, OllamaConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_OLLAMA_URL);
    assert_eq!(cfg.model, DEFAULT_MODEL);
}

#[test]
fn overrides_are_applied() {
    let cfg = OllamaConfig::from_lookup(&lookup_from(&[
        ("MINDMAP_OLLAMA_URL", "http://gpu-box:11434/"),
        ("MINDMAP_MODEL", "phi4:14b"),
        ("MINDMAP_REQUEST_TIMEOUT_SECS", "42"),
        ("MINDMAP_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "http://gpu-box:11434");
    assert_eq!(cfg.model, "phi4:14b");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn malformed_timeouts_fall_back() {
    let cfg = OllamaConfig::from_lookup(&lookup_from(&[
        ("MINDMAP_REQUEST_TIMEOUT_SECS", "soon"),
        ("MINDMAP_CONNECT_TIMEOUT_SECS", "-3"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_LLM_CONNECT_TIMEOUT_SECS);
}

#[test]
fn blank_model_uses_default() {
    let cfg = OllamaConfig::from_lookup(&lookup_from(&[("MINDMAP_MODEL", "  ")])).unwrap();
    assert_eq!(cfg.model, DEFAULT_MODEL);
}

#[test]
fn non_http_url_errors() {
    let err = OllamaConfig::from_lookup(&lookup_from(&[("MINDMAP_OLLAMA_URL", "gpu-box:11434")])).unwrap_err();
    assert!(err.to_string().contains("MINDMAP_OLLAMA_URL"));
}
