//! typekit: compile-time type tests for a PHP static analyzer.
//!
//! The crate is a plugin for a host type checker. It synthesizes structural
//! types from marker calls (`shape`, `intersection`, `optional`, `generic`),
//! checks `haveCode` / `seeReturnType` / `seePsalmIssue` assertions in test
//! classes, and prints inferred types for `@show-type` tagged nodes.
//!
//! The work is split across the workspace crates, re-exported here:
//!
//! - `typekit_common` - locations, diagnostics, configuration
//! - `typekit_solver` - the type model and subtype relation
//! - `typekit_checker` - host traits, synthesizers and the assertion engine

pub mod plugin;
pub use plugin::Plugin;

// Logging setup, opt-in through environment variables
pub mod tracing_config;

pub use typekit_checker as checker;
pub use typekit_common as common;
pub use typekit_solver as solver;

pub use typekit_common::{CodeLocation, Diagnostic, ToolkitConfig};
pub use typekit_solver::{Atomic, Union};
