//! Assertion reconcilers.
//!
//! Each reconciler needs a particular pair of bag entries. A bag missing
//! either entry produces no verdict from that reconciler.

mod see_psalm_issues;
mod see_return_type;

pub use see_psalm_issues::SeePsalmIssuesReconciler;
pub use see_return_type::SeeReturnTypeReconciler;

use super::AssertionBag;
use crate::host::Host;
use typekit_common::Diagnostic;

pub trait AssertionReconciler {
    /// Judge a finished bag. Returns the failure diagnostic, if any; the
    /// caller reports it.
    fn reconcile(&self, bag: &AssertionBag, host: &mut dyn Host) -> Option<Diagnostic>;
}

#[cfg(test)]
#[path = "../../../tests/reconciler_tests.rs"]
mod tests;
