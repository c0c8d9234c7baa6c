use super::{AssertionCollector, CollectingContext};
use crate::assertions::{AssertionBag, AssertionName, HaveCodeData};
use typekit_solver::{Callable, Union, as_single_atomic_of};

/// `haveCode(fn() => ...)`: records the block's location and return type.
///
/// The argument must be written as a closure or arrow function; a variable
/// holding a closure is not a code block.
pub struct HaveCodeCollector;

impl HaveCodeCollector {
    fn closure_return_type(context: &CollectingContext<'_>) -> Option<Union> {
        let ty = context.arg_type(0)?;
        let closure = as_single_atomic_of::<Callable>(&ty).filter(|callable| callable.is_closure)?;
        Some(closure.return_type.clone().unwrap_or_else(Union::void))
    }
}

impl AssertionCollector for HaveCodeCollector {
    fn is_supported(&self, context: &CollectingContext<'_>) -> bool {
        context.assertion_name == AssertionName::HaveCode
    }

    fn collect(&self, bag: &AssertionBag, context: &CollectingContext<'_>) -> Option<AssertionBag> {
        let block = context.arg(0).filter(|arg| arg.value.is_function_literal())?;
        let code_location = context.source.location_of(block.value.id);
        let actual_return_type = Self::closure_return_type(context)?;

        Some(bag.with(HaveCodeData {
            code_location,
            actual_return_type,
        }))
    }
}
