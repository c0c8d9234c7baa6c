//! Static test-case analysis driver.
//!
//! Owns the assertion registry and runs both assertion phases:
//!
//! - [`TestCaseAnalysis::after_expression_analysis`] collects. It may run any
//!   number of times per test method, once for each analyzed expression.
//! - [`TestCaseAnalysis::after_function_like_analysis`] reconciles. The host
//!   must call it exactly once per method body, after the last expression of
//!   that body has been analyzed. It drains every pending bag of the class.

use crate::assertions::collector::{
    AssertionCollector, CollectingContext, HaveCodeCollector, SeePsalmIssuesCollector,
    SeeReturnTypeCollector,
};
use crate::assertions::reconciler::{
    AssertionReconciler, SeePsalmIssuesReconciler, SeeReturnTypeReconciler,
};
use crate::assertions::{AssertionName, AssertionRegistry};
use crate::host::{Codebase, Host, NodeId, TypeProvider};
use crate::syntax::{
    AnalysisContext, ExprKind, ExpressionEvent, FunctionLikeEvent, FunctionLikeKind, MethodCall,
};
use std::sync::Arc;
use tracing::{Level, debug, span, trace};
use typekit_common::{Diagnostic, ToolkitConfig, diagnostic_messages};
use typekit_solver::{
    GenericObject, NamedObject, as_single_atomic_of, get_first_generic, literal_string_value,
};

pub struct TestCaseAnalysis {
    config: Arc<ToolkitConfig>,
    registry: AssertionRegistry,
    collectors: Vec<Box<dyn AssertionCollector>>,
    reconcilers: Vec<Box<dyn AssertionReconciler>>,
}

impl TestCaseAnalysis {
    #[must_use]
    pub fn new(config: Arc<ToolkitConfig>) -> Self {
        let collectors: Vec<Box<dyn AssertionCollector>> = vec![
            Box::new(HaveCodeCollector),
            Box::new(SeeReturnTypeCollector::new(&config.static_type_interface)),
            Box::new(SeePsalmIssuesCollector),
        ];
        let reconcilers: Vec<Box<dyn AssertionReconciler>> = vec![
            Box::new(SeeReturnTypeReconciler),
            Box::new(SeePsalmIssuesReconciler),
        ];
        Self {
            config,
            registry: AssertionRegistry::new(),
            collectors,
            reconcilers,
        }
    }

    /// Bags collected but not yet reconciled.
    #[must_use]
    pub const fn pending_assertions(&self) -> &AssertionRegistry {
        &self.registry
    }

    // =========================================================================
    // Collection
    // =========================================================================

    /// Collect assertion data from an assertion call expression. Any other
    /// expression is ignored.
    pub fn after_expression_analysis(&mut self, event: &ExpressionEvent<'_>, host: &mut dyn Host) {
        let ExprKind::MethodCall(call) = &event.expr.kind else {
            return;
        };
        let Some(test_class) = self.test_class(event.context, &*host) else {
            return;
        };
        let Some(test_method) = self.test_method(event.expr.id, &*host) else {
            return;
        };
        let Some(assertion_name) = self.assertion_name(call, &*host) else {
            return;
        };

        let _span = span!(
            Level::TRACE,
            "collect_assertion",
            test_class,
            test_method = test_method.as_str(),
            assertion = assertion_name.as_str()
        )
        .entered();

        let context = CollectingContext {
            test_class,
            test_method: &test_method,
            assertion_name,
            call,
            call_node: event.expr.id,
            source: &*host,
        };

        let mut bag = self.registry.get(test_class, &test_method);
        let mut malformed = false;
        for collector in self.collectors.iter().filter(|c| c.is_supported(&context)) {
            match collector.collect(&bag, &context) {
                Some(collected) => bag = collected,
                None => malformed = true,
            }
        }
        self.registry.set(test_class, &test_method, bag);

        if malformed {
            debug!("assertion arguments could not be read");
            if self.config.report_malformed_assertions {
                let location = host.location_of(event.expr.id);
                host.report(Diagnostic::from_message(
                    &diagnostic_messages::MALFORMED_ASSERTION,
                    location,
                    &[assertion_name.as_str()],
                ));
            }
        }
    }

    /// The enclosing class, if it is a test class.
    fn test_class<'c>(&self, context: &'c AnalysisContext, codebase: &dyn Codebase) -> Option<&'c str> {
        context
            .self_class
            .as_deref()
            .filter(|class| codebase.class_extends(class, &self.config.test_case_base_class))
    }

    /// The lower-cased test method name, read from the assertion call's own
    /// type: `StaticTestCase<'methodName'>`.
    fn test_method(&self, call_node: NodeId, source: &dyn TypeProvider) -> Option<String> {
        let ty = source.type_of(call_node)?;
        let generic = as_single_atomic_of::<GenericObject>(&ty)?;
        let method = get_first_generic(generic, &self.config.static_test_case_class)?;
        literal_string_value(method).map(str::to_lowercase)
    }

    /// The assertion a call makes, if its receiver is an assertion carrier.
    fn assertion_name(&self, call: &MethodCall, source: &dyn TypeProvider) -> Option<AssertionName> {
        let receiver = source.type_of(call.receiver.id)?;
        let carrier = as_single_atomic_of::<NamedObject>(&receiver)?;
        if !self.config.is_assertion_carrier(&carrier.name) {
            trace!(receiver = carrier.name.as_str(), "not an assertion carrier");
            return None;
        }
        AssertionName::from_method_name(call.name.as_deref()?)
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Reconcile every pending bag of the class after a test method body has
    /// been analyzed. Bodies other than class methods of test classes are
    /// ignored.
    pub fn after_function_like_analysis(
        &mut self,
        event: &FunctionLikeEvent<'_>,
        host: &mut dyn Host,
    ) {
        if event.kind != FunctionLikeKind::ClassMethod {
            return;
        }
        let Some(test_class) = self.test_class(event.context, &*host) else {
            return;
        };

        let _span = span!(Level::TRACE, "reconcile_assertions", test_class).entered();

        for bag in self.registry.take(test_class) {
            let verdicts: Vec<Diagnostic> = self
                .reconcilers
                .iter()
                .filter_map(|reconciler| reconciler.reconcile(&bag, host))
                .collect();
            for diagnostic in verdicts {
                debug!(kind = diagnostic.kind.as_str(), "assertion failed");
                host.report(diagnostic);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/test_case_analysis_tests.rs"]
mod tests;
