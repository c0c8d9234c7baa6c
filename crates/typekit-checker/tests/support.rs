//! Shared fixture for the checker unit tests.

use crate::host::NodeId;
use crate::in_memory::InMemoryHost;
use crate::syntax::{AnalysisContext, Arg, Expr, ExprKind, MethodCall};
use typekit_common::ToolkitConfig;
use typekit_solver::{Callable, Union};

pub(crate) const TEST_FILE: &str = "tests/ShapeTest.php";
pub(crate) const TEST_CLASS: &str = "App\\Tests\\ShapeTest";

pub(crate) struct Fixture {
    pub host: InMemoryHost,
    pub config: ToolkitConfig,
    next_node: u32,
}

impl Fixture {
    pub fn new() -> Self {
        // Surface trace output of failing tests; a second install is a no-op.
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();

        let config = ToolkitConfig::default();
        let mut host = InMemoryHost::new(TEST_FILE);
        host.add_class(TEST_CLASS, &[&config.test_case_base_class]);
        Self {
            host,
            config,
            next_node: 1,
        }
    }

    pub fn context(&self) -> AnalysisContext {
        AnalysisContext::in_class(TEST_CLASS)
    }

    /// A fresh node at `start..end`, optionally typed.
    pub fn node(&mut self, ty: Option<Union>, start: u32, end: u32) -> NodeId {
        let id = NodeId::new(self.next_node);
        self.next_node += 1;
        if let Some(ty) = ty {
            self.host.set_type(id, ty);
        }
        self.host.set_span(id, start, end);
        id
    }

    pub fn expr(&mut self, kind: ExprKind, ty: Option<Union>, start: u32, end: u32) -> Expr {
        let id = self.node(ty, start, end);
        Expr::new(id, kind)
    }

    /// An expression of no interest beyond its type.
    pub fn value(&mut self, ty: Union) -> Expr {
        self.expr(ExprKind::Other, Some(ty), 0, 0)
    }

    /// `Wrapper<ty>`.
    pub fn wrapped(&self, ty: Union) -> Union {
        Union::generic_object(self.config.static_type_interface.as_str(), [ty])
    }

    /// `StaticTestCase<'method'>`.
    pub fn carrier(&self, method: &str) -> Union {
        Union::generic_object(
            self.config.static_test_case_class.as_str(),
            [Union::literal_string(method)],
        )
    }

    /// `fn() => ...` spanning `start..end` and returning `return_type`.
    pub fn closure(&mut self, return_type: Option<Union>, start: u32, end: u32) -> Expr {
        let ty = Union::single(typekit_solver::Atomic::Callable(Callable {
            params: Vec::new(),
            return_type,
            is_closure: true,
            is_pure: false,
        }));
        self.expr(ExprKind::ArrowFunction, Some(ty), start, end)
    }

    /// `$carrier->name(args)` made inside test method `method`.
    pub fn assertion_call(
        &mut self,
        method: &str,
        name: &str,
        args: Vec<Expr>,
        start: u32,
        end: u32,
    ) -> Expr {
        let receiver = self.expr(ExprKind::Other, Some(self.carrier(method)), start, start);
        let kind = ExprKind::MethodCall(MethodCall {
            receiver: Box::new(receiver),
            name: Some(name.to_string()),
            args: args.into_iter().map(Arg::new).collect(),
        });
        self.expr(kind, Some(self.carrier(method)), start, end)
    }
}
