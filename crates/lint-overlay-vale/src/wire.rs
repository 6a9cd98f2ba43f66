//! Vale JSON wire decoding.
//!
//! `vale --output=JSON` prints one top-level object keyed by input path;
//! each value is the ordered array of alerts for that input. Decoding is
//! tolerant per entry: an alert missing its identity fields (`Check`,
//! `Line`, a two-element `Span`) is skipped with a log, never failing the
//! batch. Only structurally invalid JSON is an error.

use lint_overlay::{Alert, ByteSpan, Severity, SuggestedAction};
use serde_json::Value;

use crate::runner::CheckError;

/// Decode one wire alert object.
///
/// Returns `None` when `Check`, `Line`, or a two-element numeric `Span` is
/// missing. Unknown severity text degrades to [`Severity::Suggestion`]
/// rather than dropping the finding; empty `Link`/`Match` strings and an
/// empty `Action.Name` decode to `None`.
pub fn parse_alert(value: &Value) -> Option<Alert> {
    let check = value.get("Check")?.as_str()?.to_string();
    let line = value.get("Line")?.as_u64()? as usize;

    let span = value.get("Span")?.as_array()?;
    if span.len() != 2 {
        return None;
    }
    let start = span[0].as_u64()? as usize;
    let end = span[1].as_u64()? as usize;

    let severity = value
        .get("Severity")
        .and_then(Value::as_str)
        .and_then(Severity::from_wire)
        .unwrap_or(Severity::Suggestion);

    let message = value
        .get("Message")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let description = value
        .get("Description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let link = value
        .get("Link")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());
    let matched_text = value
        .get("Match")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let action = value.get("Action").and_then(parse_action);

    let mut alert = Alert::new(&check, severity, line, ByteSpan::new(start, end));
    alert.message = message;
    alert.description = description;
    alert.link = link;
    alert.matched_text = matched_text;
    alert.action = action;
    Some(alert)
}

fn parse_action(value: &Value) -> Option<SuggestedAction> {
    let name = value.get("Name")?.as_str()?;
    if name.is_empty() {
        return None;
    }

    let params = value
        .get("Params")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default();

    Some(SuggestedAction {
        name: name.to_string(),
        params,
    })
}

/// Decode one input file's alert array, skipping malformed entries.
pub fn parse_alerts(entries: &Value) -> Vec<Alert> {
    entries
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|entry| {
                    let alert = parse_alert(entry);
                    if alert.is_none() {
                        tracing::debug!(%entry, "skipping malformed wire alert");
                    }
                    alert
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Decode a complete checker run: the top-level path-keyed object.
///
/// Per-file array order is preserved. Fails only on structurally invalid
/// JSON; malformed entries inside a valid document are skipped.
pub fn parse_check_output(output: &str) -> Result<Vec<Alert>, CheckError> {
    let root: Value = serde_json::from_str(output)
        .map_err(|source| CheckError::InvalidOutput { source })?;

    let mut alerts = Vec::new();
    match &root {
        Value::Object(files) => {
            for entries in files.values() {
                alerts.extend(parse_alerts(entries));
            }
        }
        // Vale prints `{}` for a clean run, but tolerate a bare array too.
        Value::Array(_) => alerts.extend(parse_alerts(&root)),
        _ => {}
    }
    Ok(alerts)
}
