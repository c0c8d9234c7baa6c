//! Diagnostic types and message lookup for the plugin.
//!
//! Message data lives in `data.rs`. Every diagnostic the plugin raises has a
//! numeric code, an issue kind name (the name the host's issue sink uses to
//! filter and suppress issues), and a message template with `{0}`, `{1}`
//! placeholders.
//!
//! The same `Diagnostic` record is used for issues the host already recorded,
//! since reconciliation reads those back to match expected issues.

use crate::location::CodeLocation;
use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A diagnostic message definition with code, kind, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub kind: &'static str,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// An issue reported to, or recorded by, the host's issue sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Issue kind as the host names it (e.g. `InvalidArgument`).
    pub kind: String,
    /// Zero for issues the plugin did not raise itself.
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message_text: String,
    pub location: CodeLocation,
}

impl Diagnostic {
    /// Create a diagnostic from one of the plugin's message definitions.
    #[must_use]
    pub fn from_message(
        message: &DiagnosticMessage,
        location: CodeLocation,
        args: &[&str],
    ) -> Self {
        Self {
            kind: message.kind.to_string(),
            code: message.code,
            category: message.category,
            message_text: format_message(message.message, args),
            location,
        }
    }

    /// Create a host-side error diagnostic of an arbitrary kind.
    #[must_use]
    pub fn error(kind: impl Into<String>, message: impl Into<String>, location: CodeLocation) -> Self {
        Self {
            kind: kind.into(),
            code: 0,
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            location,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> u32 {
        self.location.start
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> u32 {
        self.location.end
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
///
/// Placeholders are substituted in one left-to-right pass; argument text is
/// copied verbatim and never scanned for placeholders. A placeholder without
/// a matching argument is kept as written.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = (digits > 0 && after[digits..].starts_with('}'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|index| args.get(index));
        match arg {
            Some(arg) => {
                result.push_str(arg);
                rest = &after[digits + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Look up a diagnostic message definition by issue kind name.
#[must_use]
pub fn get_diagnostic_message_by_kind(kind: &str) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.kind == kind)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

#[cfg(test)]
#[path = "../../tests/diagnostics_tests.rs"]
mod tests;
