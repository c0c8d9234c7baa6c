//! Assertion collectors.
//!
//! One collector per assertion call. The analysis driver runs every collector
//! that supports the call, in order, folding the bag through them; a collector
//! that cannot read its arguments returns `None` and the bag passes through
//! unchanged.

mod have_code;
mod see_psalm_issues;
mod see_return_type;

pub use have_code::HaveCodeCollector;
pub use see_psalm_issues::SeePsalmIssuesCollector;
pub use see_return_type::SeeReturnTypeCollector;

use super::{AssertionBag, AssertionName};
use crate::call_args::arg_type_at;
use crate::host::{NodeId, TypeProvider};
use crate::syntax::{Arg, MethodCall};
use typekit_common::CodeLocation;
use typekit_solver::Union;

/// Everything a collector may look at for one assertion call.
pub struct CollectingContext<'a> {
    pub test_class: &'a str,
    /// Lower-cased test method name.
    pub test_method: &'a str,
    pub assertion_name: AssertionName,
    pub call: &'a MethodCall,
    /// Node of the whole assertion call expression.
    pub call_node: NodeId,
    pub source: &'a dyn TypeProvider,
}

impl CollectingContext<'_> {
    /// Location of the assertion call.
    #[must_use]
    pub fn code_location(&self) -> CodeLocation {
        self.source.location_of(self.call_node)
    }

    #[must_use]
    pub fn arg(&self, position: usize) -> Option<&Arg> {
        self.call.args.get(position)
    }

    /// Inferred type of the argument at `position`.
    #[must_use]
    pub fn arg_type(&self, position: usize) -> Option<Union> {
        arg_type_at(&self.call.args, position, self.source)
    }
}

pub trait AssertionCollector {
    fn is_supported(&self, context: &CollectingContext<'_>) -> bool;

    /// The bag with this collector's data folded in, or `None` if the call's
    /// arguments do not have the expected shape.
    fn collect(&self, bag: &AssertionBag, context: &CollectingContext<'_>) -> Option<AssertionBag>;
}

#[cfg(test)]
#[path = "../../../tests/collector_tests.rs"]
mod tests;
