use super::*;

fn levels(text: &str) -> Vec<usize> {
    parse(text).iter().map(|r| r.level).collect()
}

fn titles(text: &str) -> Vec<String> {
    parse(text).into_iter().map(|r| r.title).collect()
}

// =============================================================
// Level derivation
// =============================================================

#[test]
fn level_is_hash_count_minus_one() {
    for n in 1..=8 {
        let line = format!("{} Title", "#".repeat(n));
        let records = parse(&line);
        assert_eq!(records.len(), 1, "input {line:?}");
        assert_eq!(records[0].level, n - 1, "input {line:?}");
    }
}

#[test]
fn mixed_levels_in_document_order() {
    let text = "# Root\n## A\n### A1\n## B\n#### Deep";
    assert_eq!(levels(text), vec![0, 1, 2, 1, 3]);
    assert_eq!(titles(text), vec!["Root", "A", "A1", "B", "Deep"]);
}

// =============================================================
// Qualification rules
// =============================================================

#[test]
fn empty_input_yields_nothing() {
    assert!(parse("").is_empty());
}

#[test]
fn body_text_and_blank_lines_are_ignored() {
    let text = "intro line\n\n# Root\nsome body text\n   \n## Child\n- bullet";
    assert_eq!(titles(text), vec!["Root", "Child"]);
}

#[test]
fn hash_without_space_is_not_a_heading() {
    assert!(parse("#hashtag").is_empty());
    assert!(parse("##also not").is_empty());
}

#[test]
fn heading_with_empty_title_is_skipped() {
    assert!(parse("#").is_empty());
    assert!(parse("##   ").is_empty());
    assert_eq!(titles("# \n# Real"), vec!["Real"]);
}

#[test]
fn surrounding_whitespace_is_stripped() {
    let records = parse("   ##   Padded title   ");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, 1);
    assert_eq!(records[0].title, "Padded title");
}

#[test]
fn separator_must_be_a_plain_space() {
    assert!(parse("#\tTabbed\n#\u{a0}Nbsp\n#\u{3000}Ideo").is_empty());
    assert_eq!(titles("#\tNo\n# \tYes"), vec!["Yes"]);
}

#[test]
fn inner_hashes_are_kept_in_title() {
    assert_eq!(titles("# C# and F#"), vec!["C# and F#"]);
}

#[test]
fn level_skips_are_not_validated_here() {
    assert_eq!(levels("# Root\n#### Orphan"), vec![0, 3]);
}

// =============================================================
// Source lines
// =============================================================

#[test]
fn source_line_is_zero_based_input_index() {
    let text = "preamble\n# Root\n\nbody\n## Child";
    let lines: Vec<usize> = parse(text).iter().map(|r| r.source_line).collect();
    assert_eq!(lines, vec![1, 4]);
}

#[test]
fn crlf_line_endings_are_handled() {
    let records = parse("# Root\r\n## Child\r\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].title, "Child");
    assert_eq!(records[1].source_line, 1);
}

#[test]
fn parsing_is_deterministic() {
    let text = "# Root\n## A\n## B\n### B1";
    assert_eq!(parse(text), parse(text));
}
