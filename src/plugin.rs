//! The plugin entry point a host embeds.
//!
//! A [`Plugin`] owns every hook built from one [`ToolkitConfig`]. The host
//! calls the four entry points below while it analyzes a compilation unit:
//!
//! - [`Plugin::method_return_type`] whenever it needs the return type of a
//!   call on one of [`Plugin::class_like_names`]
//! - [`Plugin::after_expression_analysis`] after every expression
//! - [`Plugin::after_statement_analysis`] after every statement
//! - [`Plugin::after_function_like_analysis`] once per function-like body,
//!   after the last expression of that body

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use typekit_checker::{
    AssertionRegistry, ExpressionEvent, FunctionLikeEvent, Host, MethodReturnTypeEvent,
    ReturnTypeProviders, ShowTypeHook, StatementEvent, TestCaseAnalysis,
};
use typekit_common::ToolkitConfig;
use typekit_solver::Union;

pub struct Plugin {
    config: Arc<ToolkitConfig>,
    providers: ReturnTypeProviders,
    show_type: ShowTypeHook,
    test_cases: TestCaseAnalysis,
}

impl Plugin {
    #[must_use]
    pub fn new(config: ToolkitConfig) -> Self {
        let config = Arc::new(config);
        debug!(
            static_types = config.static_types_class.as_str(),
            wrapper = config.static_type_interface.as_str(),
            "plugin configured"
        );
        Self {
            providers: ReturnTypeProviders::new(&config),
            show_type: ShowTypeHook::new(config.show_type_tag.as_str()),
            test_cases: TestCaseAnalysis::new(Arc::clone(&config)),
            config,
        }
    }

    /// Build from a JSON configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        Ok(Self::new(ToolkitConfig::load(path)?))
    }

    #[must_use]
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Classes whose method return types this plugin synthesizes.
    #[must_use]
    pub fn class_like_names(&self) -> Vec<&str> {
        self.providers.class_like_names()
    }

    /// Return type of a marker construction call, or `None` to let the host
    /// infer it as usual.
    #[must_use]
    pub fn method_return_type(&self, event: &MethodReturnTypeEvent<'_>) -> Option<Union> {
        self.providers.get_method_return_type(event)
    }

    pub fn after_expression_analysis(&mut self, event: &ExpressionEvent<'_>, host: &mut dyn Host) {
        self.show_type.after_expression_analysis(event, host);
        self.test_cases.after_expression_analysis(event, host);
    }

    pub fn after_statement_analysis(&mut self, event: &StatementEvent<'_>, host: &mut dyn Host) {
        self.show_type.after_statement_analysis(event, host);
    }

    pub fn after_function_like_analysis(
        &mut self,
        event: &FunctionLikeEvent<'_>,
        host: &mut dyn Host,
    ) {
        self.test_cases.after_function_like_analysis(event, host);
    }

    /// Assertions collected and not yet reconciled.
    #[must_use]
    pub const fn pending_assertions(&self) -> &AssertionRegistry {
        self.test_cases.pending_assertions()
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new(ToolkitConfig::default())
    }
}
