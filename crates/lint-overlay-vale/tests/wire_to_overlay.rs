//! End to end: a captured Vale payload flows through wire decoding into a
//! surface, and the resulting overlay answers queries correctly.

use lint_overlay::{
    EditorSurface, Effect, SelectionRange, Severity, TextEdit, Transaction,
};
use lint_overlay_vale::parse_check_output;
use pretty_assertions::assert_eq;

const DOCUMENT: &str = "teh word is wrong\nthe café test line\nvery unique content";

// Captured from `vale --output=JSON --ext=.md` over DOCUMENT (trimmed to
// the fields this crate consumes).
const CHECK_OUTPUT: &str = r#"{
    "stdin.md": [
        {
            "Action": { "Name": "replace", "Params": ["the"] },
            "Check": "Vale.Spelling",
            "Description": "",
            "Line": 1,
            "Link": "",
            "Match": "teh",
            "Message": "Did you really mean 'teh'?",
            "Severity": "error",
            "Span": [1, 3]
        },
        {
            "Action": { "Name": "", "Params": null },
            "Check": "Vale.Terms",
            "Description": "Avoid bare 'café' in headings.",
            "Line": 2,
            "Link": "https://example.com/styles/terms",
            "Match": "café",
            "Message": "Consider 'coffee shop'.",
            "Severity": "warning",
            "Span": [5, 9]
        },
        {
            "Action": { "Name": "remove", "Params": [] },
            "Check": "Vale.Adverbs",
            "Description": "",
            "Line": 3,
            "Link": "",
            "Match": "very",
            "Message": "Remove 'very'.",
            "Severity": "suggestion",
            "Span": [1, 4]
        }
    ]
}"#;

fn checked_surface() -> EditorSurface {
    let mut surface = EditorSurface::new(DOCUMENT);
    let ticket = surface.begin_check();
    let alerts = parse_check_output(CHECK_OUTPUT).unwrap();
    assert!(surface.deliver_alerts(ticket, alerts));
    surface
}

#[test]
fn test_decoded_batch_populates_overlay() {
    let surface = checked_surface();

    let stats = surface.stats();
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.warnings, 1);
    assert_eq!(stats.suggestions, 1);
    assert_eq!(surface.registry().len(), 3);
}

#[test]
fn test_decoded_alerts_resolve_at_their_positions() {
    let surface = checked_surface();

    // Line 1: "teh" at chars 0..2.
    let spelling = surface.find_alert_at(1).unwrap();
    assert_eq!(spelling.check, "Vale.Spelling");
    assert_eq!(spelling.severity, Severity::Error);
    assert_eq!(spelling.action.as_ref().unwrap().params, vec!["the"]);

    // Line 2 starts at char 18; span [5, 9] covers the five bytes of
    // "café" (é is two bytes), which is chars 4..7 of the line, so the
    // mark sits at absolute 22..=25.
    let terms = surface.find_alert_at(23).unwrap();
    assert_eq!(terms.check, "Vale.Terms");
    assert_eq!(
        terms.link.as_deref(),
        Some("https://example.com/styles/terms")
    );
    assert!(terms.action.is_none());

    // Line 3 starts at char 37; "very" is chars 0..3 of the line.
    let adverbs = surface.find_alert_at(37).unwrap();
    assert_eq!(adverbs.check, "Vale.Adverbs");
    assert_eq!(adverbs.severity, Severity::Suggestion);

    // Plain text between marks resolves to nothing.
    assert!(surface.find_alert_at(10).is_none());
}

#[test]
fn test_select_decoded_alert_by_id() {
    let mut surface = checked_surface();
    let id = surface.find_alert_at(23).unwrap().id();

    surface.apply(Transaction::effects(vec![Effect::Select(id.clone())]));

    let selection = surface.overlay().selection().unwrap();
    assert_eq!(selection.alert_id, id);
    assert_eq!(selection.from, 22);
    assert_eq!(selection.to, 25);
}

#[test]
fn test_fixing_flagged_word_drops_only_its_mark() {
    let mut surface = checked_surface();

    // Fix the typo on line 1 with the caret ending inside the word.
    surface.apply(Transaction::new(
        vec![TextEdit::replace(0, "teh", "the")],
        Vec::new(),
        Some(SelectionRange::caret(3)),
    ));

    assert!(surface.find_alert_at(1).is_none());
    assert_eq!(surface.stats().total_marks(), 2);
    assert_eq!(surface.registry().len(), 2);

    // The other marks kept their (unshifted) positions.
    assert_eq!(surface.find_alert_at(23).unwrap().check, "Vale.Terms");
    assert_eq!(surface.find_alert_at(37).unwrap().check, "Vale.Adverbs");
}

#[test]
fn test_recheck_after_reset_replaces_all_state() {
    let mut surface = checked_surface();

    let stale = surface.begin_check();
    surface.reset();
    assert!(surface.overlay().is_empty());

    // The in-flight result from before the reset is dropped.
    let stale_alerts = parse_check_output(CHECK_OUTPUT).unwrap();
    assert!(!surface.deliver_alerts(stale, stale_alerts));
    assert!(surface.overlay().is_empty());

    // A fresh check repopulates.
    let ticket = surface.begin_check();
    let alerts = parse_check_output(CHECK_OUTPUT).unwrap();
    assert!(surface.deliver_alerts(ticket, alerts));
    assert_eq!(surface.stats().total_marks(), 3);
}
