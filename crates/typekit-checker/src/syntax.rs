//! Syntax nodes and host events the hooks receive.
//!
//! Only the node shapes the plugin dispatches on are modelled. Everything else
//! a host may hand over collapses into `Other`.

use crate::host::{NodeId, TypeProvider};
use typekit_solver::Union;

// =============================================================================
// Nodes
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
    /// Raw text of the doc comment attached to the node, if any.
    pub doc_comment: Option<String>,
}

impl Expr {
    #[must_use]
    pub fn new(id: NodeId, kind: ExprKind) -> Self {
        Self {
            id,
            kind,
            doc_comment: None,
        }
    }

    #[must_use]
    pub fn with_doc_comment(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    /// Closures and arrow functions.
    #[must_use]
    pub const fn is_function_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Closure | ExprKind::ArrowFunction)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    MethodCall(MethodCall),
    Assign { value: Box<Expr> },
    Closure,
    ArrowFunction,
    Other,
}

/// `$receiver->name(args)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodCall {
    pub receiver: Box<Expr>,
    /// `None` for a dynamic member name (`$x->$name()`).
    pub name: Option<String>,
    pub args: Vec<Arg>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arg {
    pub value: Expr,
}

impl Arg {
    #[must_use]
    pub const fn new(value: Expr) -> Self {
        Self { value }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub id: NodeId,
    pub kind: StmtKind,
    pub doc_comment: Option<String>,
}

impl Stmt {
    #[must_use]
    pub fn new(id: NodeId, kind: StmtKind) -> Self {
        Self {
            id,
            kind,
            doc_comment: None,
        }
    }

    #[must_use]
    pub fn with_doc_comment(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Return { value: Option<Expr> },
    Expression(Expr),
    Other,
}

// =============================================================================
// Events
// =============================================================================

/// Scope information of the node being analyzed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    /// Fully qualified name of the enclosing class, if any.
    pub self_class: Option<String>,
}

impl AnalysisContext {
    #[must_use]
    pub fn in_class(class: impl Into<String>) -> Self {
        Self {
            self_class: Some(class.into()),
        }
    }
}

/// Fired after the host has analyzed an expression.
#[derive(Clone, Copy, Debug)]
pub struct ExpressionEvent<'a> {
    pub expr: &'a Expr,
    pub context: &'a AnalysisContext,
}

/// Fired after the host has analyzed a statement.
#[derive(Clone, Copy, Debug)]
pub struct StatementEvent<'a> {
    pub stmt: &'a Stmt,
    pub context: &'a AnalysisContext,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionLikeKind {
    ClassMethod,
    Function,
    Closure,
    ArrowFunction,
}

/// Fired after the host has analyzed a whole function-like body.
#[derive(Clone, Copy, Debug)]
pub struct FunctionLikeEvent<'a> {
    pub node: NodeId,
    pub kind: FunctionLikeKind,
    pub context: &'a AnalysisContext,
}

/// Asked by the host when it needs the return type of a method call.
pub struct MethodReturnTypeEvent<'a> {
    /// Types of the call's argument nodes.
    pub source: &'a dyn TypeProvider,
    pub fq_class_name: &'a str,
    pub method_name_lowercase: &'a str,
    pub call_args: &'a [Arg],
    /// Template parameters the host inferred for the call, if any.
    pub template_type_parameters: Option<&'a [Union]>,
}
