//! First-class alert data model.
//!
//! An alert is one finding produced by an external prose/lint checker.
//! Checkers address text by `(1-based line, 1-based UTF-8 byte span within
//! that line)` against the snapshot they analyzed; the [`mapper`](crate::mapper)
//! module converts that addressing into absolute character offsets in the
//! live document.

use std::fmt;

/// Alert severity levels, as reported by the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Rule violations that should block publishing.
    Error,
    /// Rule violations worth fixing.
    Warning,
    /// Stylistic suggestions.
    Suggestion,
}

impl Severity {
    /// Wire spelling of this severity (`"error"`, `"warning"`, `"suggestion"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }

    /// Parse the wire spelling, case-insensitively.
    pub fn from_wire(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("error") {
            Some(Severity::Error)
        } else if value.eq_ignore_ascii_case("warning") {
            Some(Severity::Warning)
        } else if value.eq_ignore_ascii_case("suggestion") {
            Some(Severity::Suggestion)
        } else {
            None
        }
    }

    /// Stable class name renderers attach to marks of this severity.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Error => "lint-error",
            Severity::Warning => "lint-warning",
            Severity::Suggestion => "lint-suggestion",
        }
    }
}

/// A half-open `[start, end)` span of 1-based UTF-8 byte offsets within one line.
///
/// This is the checker's native addressing. It is only meaningful together
/// with the line it refers to; see [`crate::mapper::map_alert`] for the
/// conversion into character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteSpan {
    /// 1-based byte offset where the match starts.
    pub start: usize,
    /// 1-based byte offset just past the match.
    pub end: usize,
}

impl ByteSpan {
    /// Create a new byte span.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A remediation suggested by the checker (e.g. candidate replacements).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedAction {
    /// Action name (checker-defined, e.g. `"replace"`).
    pub name: String,
    /// Action parameters (e.g. replacement strings, in preference order).
    pub params: Vec<String>,
}

/// A single checker finding against a document snapshot.
///
/// `check`, `line`, and `span` identify the alert (see [`Alert::id`]); the
/// remaining fields are display-only and never participate in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Rule identifier, e.g. `"Vale.Spelling"`.
    pub check: String,
    /// Severity reported by the checker.
    pub severity: Severity,
    /// 1-based line number in the checked snapshot.
    pub line: usize,
    /// Byte span of the match within that line.
    pub span: ByteSpan,
    /// Human-readable finding message.
    pub message: String,
    /// Longer rule description (may be empty).
    pub description: String,
    /// Documentation link for the rule, if any.
    pub link: Option<String>,
    /// The exact text the rule matched, if reported.
    pub matched_text: Option<String>,
    /// Suggested remediation, if any.
    pub action: Option<SuggestedAction>,
}

impl Alert {
    /// Create an alert from its identity fields, leaving display fields empty.
    pub fn new(check: &str, severity: Severity, line: usize, span: ByteSpan) -> Self {
        Self {
            check: check.to_string(),
            severity,
            line,
            span,
            message: String::new(),
            description: String::new(),
            link: None,
            matched_text: None,
            action: None,
        }
    }

    /// Create an alert with a message (the most common display field).
    pub fn with_message(
        check: &str,
        severity: Severity,
        line: usize,
        span: ByteSpan,
        message: &str,
    ) -> Self {
        let mut alert = Self::new(check, severity, line, span);
        alert.message = message.to_string();
        alert
    }

    /// Deterministic identity of this alert: `"{line}:{start}:{end}:{check}"`.
    ///
    /// Pure function of the identity fields: two alerts with equal
    /// `(line, span, check)` produce equal ids even when their display
    /// fields differ. The registry resolves such duplicates last-write-wins.
    pub fn id(&self) -> AlertId {
        AlertId(format!(
            "{}:{}:{}:{}",
            self.line, self.span.start, self.span.end, self.check
        ))
    }
}

/// Deterministic alert identity.
///
/// Formatted as `"{line}:{span.start}:{span.end}:{check}"` by [`Alert::id`].
/// Ids are the join key between overlay markers and registry entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(String);

impl AlertId {
    /// Wrap an already-formatted id (e.g. one echoed back by a host).
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
