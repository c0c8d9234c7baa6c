//! Call argument resolution.

use crate::host::{NodeId, TypeProvider};
use crate::syntax::Arg;
use tracing::trace;
use typekit_common::CodeLocation;
use typekit_solver::Union;

/// A call argument together with the type the host inferred for it.
#[derive(Clone, Debug, PartialEq)]
pub struct CallArg {
    pub node: NodeId,
    pub location: CodeLocation,
    pub ty: Union,
}

impl CallArg {
    /// Resolve a single argument. `None` if the host has no type for it.
    #[must_use]
    pub fn resolve(arg: &Arg, source: &dyn TypeProvider) -> Option<Self> {
        let node = arg.value.id;
        let ty = source.type_of(node)?;
        Some(Self {
            node,
            location: source.location_of(node),
            ty,
        })
    }

    /// Resolve every argument of a call. If any argument is unresolved the
    /// whole extraction is `None`.
    #[must_use]
    pub fn resolve_all(args: &[Arg], source: &dyn TypeProvider) -> Option<Vec<Self>> {
        let resolved: Option<Vec<Self>> = args.iter().map(|arg| Self::resolve(arg, source)).collect();
        if resolved.is_none() {
            trace!(count = args.len(), "call has unresolved arguments");
        }
        resolved
    }
}

/// Type of the argument at `position`, if present and resolved.
#[must_use]
pub fn arg_type_at(args: &[Arg], position: usize, source: &dyn TypeProvider) -> Option<Union> {
    args.get(position).and_then(|arg| source.type_of(arg.value.id))
}

#[cfg(test)]
#[path = "../tests/call_args_tests.rs"]
mod tests;
