//! `@show-type` debugging aid.
//!
//! Any expression or return statement whose doc comment carries the
//! configured tag gets a `Trace` diagnostic with its inferred type, printed
//! by [`TypePrettier`].

use crate::host::{Host, NodeId};
use crate::syntax::{ExprKind, ExpressionEvent, StatementEvent, StmtKind};
use typekit_common::{Diagnostic, diagnostic_messages};
use typekit_solver::TypePrettier;

pub const UNABLE_TO_DETERMINE_TYPE: &str = "Unable to determine type";

pub struct ShowTypeHook {
    tag: String,
}

impl ShowTypeHook {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// For an assignment the type shown is that of the assigned value.
    pub fn after_expression_analysis(&self, event: &ExpressionEvent<'_>, host: &mut dyn Host) {
        let expr = event.expr;
        let typed_node = match &expr.kind {
            ExprKind::Assign { value } => value.id,
            _ => expr.id,
        };
        self.handle(expr.doc_comment.as_deref(), expr.id, typed_node, host);
    }

    /// Only return statements are inspected; the type shown is that of the
    /// returned value, or of the statement itself for a bare `return`.
    pub fn after_statement_analysis(&self, event: &StatementEvent<'_>, host: &mut dyn Host) {
        let stmt = event.stmt;
        let StmtKind::Return { value } = &stmt.kind else {
            return;
        };
        let typed_node = value.as_ref().map_or(stmt.id, |value| value.id);
        self.handle(stmt.doc_comment.as_deref(), stmt.id, typed_node, host);
    }

    fn handle(&self, doc: Option<&str>, node: NodeId, typed_node: NodeId, host: &mut dyn Host) {
        if !doc.is_some_and(|doc| doc.contains(self.tag.as_str())) {
            return;
        }

        let shown = host
            .type_of(typed_node)
            .map_or_else(|| UNABLE_TO_DETERMINE_TYPE.to_string(), |ty| TypePrettier::pretty(&ty));
        let location = host.location_of(node);
        host.report(Diagnostic::from_message(
            &diagnostic_messages::TRACE,
            location,
            &[&shown],
        ));
    }
}

#[cfg(test)]
#[path = "../tests/show_type_tests.rs"]
mod tests;
