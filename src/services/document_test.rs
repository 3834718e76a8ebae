use super::*;

// =========================================================================
// Buffer
// =========================================================================

#[test]
fn new_document_is_untitled_and_clean() {
    let doc = Document::new();
    assert_eq!(doc.text(), "");
    assert!(doc.path().is_none());
    assert!(!doc.is_modified());
    assert_eq!(doc.title(), "Mind Map Editor - New File");
}

#[test]
fn tutorial_starts_with_single_root() {
    let doc = Document::tutorial();
    assert!(doc.text().starts_with("# Mind Map Tutorial"));
    assert_eq!(doc.text().lines().filter(|l| l.starts_with("# ")).count(), 1);
    assert!(!doc.is_modified());
}

#[test]
fn set_text_marks_modified_only_on_change() {
    let mut doc = Document::new();
    doc.set_text("");
    assert!(!doc.is_modified());
    doc.set_text("# Root");
    assert!(doc.is_modified());
}

#[test]
fn unsaved_edits_are_reported_until_discarded() {
    let mut doc = Document::new();
    assert!(doc.ensure_saved().is_ok());
    doc.set_text("# Draft");
    let err = doc.ensure_saved().unwrap_err();
    assert!(matches!(err, DocumentError::UnsavedChanges { .. }));
    assert!(err.to_string().contains("New File"));

    doc.discard_changes();
    assert!(doc.ensure_saved().is_ok());
    assert_eq!(doc.text(), "# Draft");
}

// =========================================================================
// File round-trip
// =========================================================================

#[test]
fn save_as_then_load_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.md");
    let text = "# Root\r\n## Child\n\nbody text  \n### Ünïcode";

    let mut doc = Document::new();
    doc.set_text(text);
    doc.save_as(&path).unwrap();
    assert!(!doc.is_modified());
    assert_eq!(doc.path(), Some(path.as_path()));
    assert_eq!(doc.title(), format!("Mind Map Editor - {}", path.display()));

    let loaded = Document::load(&path).unwrap();
    assert_eq!(loaded.text(), text);
    assert!(!loaded.is_modified());
    assert_eq!(fs::read(&path).unwrap(), text.as_bytes());
}

#[test]
fn save_writes_to_existing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.md");
    fs::write(&path, "# Old").unwrap();

    let mut doc = Document::load(&path).unwrap();
    doc.set_text("# New");
    doc.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "# New");
}

#[test]
fn save_untitled_needs_path() {
    let mut doc = Document::new();
    doc.set_text("# Root");
    assert!(matches!(doc.save(), Err(DocumentError::NoPath)));
    assert!(doc.is_modified());
}

#[test]
fn load_missing_file_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.md");
    let err = Document::load(&path).unwrap_err();
    assert!(matches!(err, DocumentError::Read { .. }));
    assert!(err.to_string().contains("missing.md"));
}

#[test]
fn failed_save_leaves_buffer_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("no-such-dir").join("map.md");

    let mut doc = Document::new();
    doc.set_text("# Keep me");
    let err = doc.save_as(&bad).unwrap_err();
    assert!(matches!(err, DocumentError::Write { .. }));
    assert_eq!(doc.text(), "# Keep me");
    assert!(doc.is_modified());
    assert!(doc.path().is_none());
}
