//! Host boundary.
//!
//! The plugin runs inside a host type checker and never inspects source code
//! itself. Everything it needs from the host goes through three narrow
//! capabilities:
//!
//! - [`TypeProvider`]: the inferred type and location of an analyzed node
//! - [`Codebase`]: class relationships and the subtype relation
//! - [`IssueBuffer`]: the host's issue sink
//!
//! Host event types are adapted to these traits once, at the boundary.

use typekit_common::{CodeLocation, Diagnostic};
use typekit_solver::Union;

/// Identity of a syntax node in the host's tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

/// Types inferred by the host for already-analyzed nodes.
pub trait TypeProvider {
    /// The inferred type of `node`, if the host has computed one.
    fn type_of(&self, node: NodeId) -> Option<Union>;

    /// Where `node` lives in source.
    fn location_of(&self, node: NodeId) -> CodeLocation;
}

/// Whole-program queries.
pub trait Codebase {
    /// Whether `child` extends (directly or transitively) `parent`.
    fn class_extends(&self, child: &str, parent: &str) -> bool;

    /// `input ⊑ container` by the host's subtype relation.
    fn is_type_contained_by_type(&self, input: &Union, container: &Union) -> bool;
}

/// The host's issue sink.
pub trait IssueBuffer {
    /// Record a new issue.
    fn report(&mut self, issue: Diagnostic);

    /// All issues currently recorded for `file`, in recording order.
    fn issues_for(&self, file: &str) -> Vec<Diagnostic>;

    /// Drop the issue of `kind` starting at byte `from` in `file`.
    fn remove(&mut self, file: &str, kind: &str, from: u32);
}

/// Everything the analysis hooks need from the host.
pub trait Host: TypeProvider + Codebase + IssueBuffer {}

impl<T: TypeProvider + Codebase + IssueBuffer + ?Sized> Host for T {}
