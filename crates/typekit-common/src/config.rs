//! Toolkit configuration.
//!
//! The plugin recognizes marker calls and assertion calls by class name. The
//! names default to the classes shipped with the PHP side of the toolkit and
//! can be overridden from a JSON document, e.g.
//!
//! ```json
//! {
//!   "staticTypesClass": "App\\Testing\\T",
//!   "reportMalformedAssertions": true
//! }
//! ```
//!
//! Missing fields keep their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STATIC_TYPES_CLASS: &str = "Fp\\PsalmToolkit\\StaticType\\StaticTypes";
pub const DEFAULT_STATIC_TYPE_INTERFACE: &str = "Fp\\PsalmToolkit\\StaticType\\StaticTypeInterface";
pub const DEFAULT_TEST_CASE_BASE_CLASS: &str = "Fp\\PsalmToolkit\\StaticTest\\PsalmTest";
pub const DEFAULT_STATIC_TEST_CASE_CLASS: &str = "Fp\\PsalmToolkit\\StaticTest\\StaticTestCase";
pub const DEFAULT_CODE_BLOCK_FACTORY_CLASS: &str =
    "Fp\\PsalmToolkit\\StaticTest\\PsalmCodeBlockFactory";
pub const DEFAULT_SHOW_TYPE_TAG: &str = "@show-type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Class whose static `shape`, `intersection` and `generic` calls are synthesized.
    pub static_types_class: String,
    /// Wrapper class of every synthesized type; also the receiver of `optional`.
    pub static_type_interface: String,
    /// Test classes must extend this class for assertions to be collected.
    pub test_case_base_class: String,
    /// Assertion carrier returned by `test()`; parameterized by the test method name.
    pub static_test_case_class: String,
    /// Second assertion carrier (the object `haveCode` is called on).
    pub code_block_factory_class: String,
    /// Doc-comment tag that makes the show-type hook print an inferred type.
    pub show_type_tag: String,
    /// Report recognized assertion calls whose arguments could not be read.
    pub report_malformed_assertions: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            static_types_class: DEFAULT_STATIC_TYPES_CLASS.to_string(),
            static_type_interface: DEFAULT_STATIC_TYPE_INTERFACE.to_string(),
            test_case_base_class: DEFAULT_TEST_CASE_BASE_CLASS.to_string(),
            static_test_case_class: DEFAULT_STATIC_TEST_CASE_CLASS.to_string(),
            code_block_factory_class: DEFAULT_CODE_BLOCK_FACTORY_CLASS.to_string(),
            show_type_tag: DEFAULT_SHOW_TYPE_TAG.to_string(),
            report_malformed_assertions: false,
        }
    }
}

impl ToolkitConfig {
    /// Parse a configuration document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("failed to parse toolkit configuration")
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read toolkit configuration {}", path.display()))?;
        Self::from_json_str(&source)
            .with_context(|| format!("invalid toolkit configuration {}", path.display()))
    }

    /// Whether `class_name` is one of the two classes assertion calls are made on.
    #[must_use]
    pub fn is_assertion_carrier(&self, class_name: &str) -> bool {
        class_name == self.static_test_case_class || class_name == self.code_block_factory_class
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
