//! Common types and utilities for the typekit checker plugin.
//!
//! This crate provides foundational types used across all typekit crates:
//! - Source locations (`CodeLocation`) with byte-range containment
//! - Diagnostics (`Diagnostic`, codes, message templates)
//! - Toolkit configuration (`ToolkitConfig`)

// Source locations reported by the host (byte offsets)
pub mod location;
pub use location::CodeLocation;

// Diagnostic codes, message templates and the diagnostic record itself
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message,
};

// Class names and switches the plugin is configured with
pub mod config;
pub use config::ToolkitConfig;
