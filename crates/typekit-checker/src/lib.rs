//! Checker-side plugin hooks.
//!
//! - `host` - the capabilities the plugin needs from the host checker
//! - `syntax` - the node shapes and host events the hooks dispatch on
//! - `call_args` - resolving call arguments to their inferred types
//! - `synth` - the four structural type synthesizers
//! - `assertions` - assertion data, registry, collectors and reconcilers
//! - `test_case_analysis` - the two-phase assertion driver
//! - `show_type` - the `@show-type` debugging hook
//! - `in_memory` - a self-contained host for tests and embedding

pub mod assertions;
pub mod call_args;
pub mod host;
pub mod in_memory;
pub mod show_type;
pub mod synth;
pub mod syntax;
pub mod test_case_analysis;

pub use assertions::{
    AssertionBag, AssertionData, AssertionKey, AssertionKind, AssertionName, AssertionPayload,
    AssertionRegistry, ExpectedIssue, HaveCodeData, SeePsalmIssuesData, SeeReturnTypeData,
};
pub use call_args::CallArg;
pub use host::{Codebase, Host, IssueBuffer, NodeId, TypeProvider};
pub use in_memory::{ClassTable, InMemoryHost};
pub use show_type::ShowTypeHook;
pub use synth::{MethodReturnTypeProvider, ReturnTypeProviders};
pub use syntax::{
    AnalysisContext, Arg, Expr, ExprKind, ExpressionEvent, FunctionLikeEvent, FunctionLikeKind,
    MethodCall, MethodReturnTypeEvent, StatementEvent, Stmt, StmtKind,
};
pub use test_case_analysis::TestCaseAnalysis;

#[cfg(test)]
#[path = "../tests/support.rs"]
pub(crate) mod test_support;
