use super::{AssertionCollector, CollectingContext};
use crate::assertions::{AssertionBag, AssertionName, SeeReturnTypeData};
use typekit_solver::{bool_literal_value, unwrap_generic};

/// `seeReturnType(Wrapper<T>, invariant?)`.
///
/// The second argument switches the comparison only when it is a `true` or
/// `false` literal; anything else keeps the invariant default.
pub struct SeeReturnTypeCollector {
    wrapper: String,
}

impl SeeReturnTypeCollector {
    #[must_use]
    pub fn new(wrapper: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
        }
    }
}

impl AssertionCollector for SeeReturnTypeCollector {
    fn is_supported(&self, context: &CollectingContext<'_>) -> bool {
        context.assertion_name == AssertionName::SeeReturnType
    }

    fn collect(&self, bag: &AssertionBag, context: &CollectingContext<'_>) -> Option<AssertionBag> {
        let wrapped = context.arg_type(0)?;
        let expected_return_type = unwrap_generic(&wrapped, &self.wrapper)?.clone();
        let invariant = context
            .arg_type(1)
            .and_then(|ty| bool_literal_value(&ty))
            .unwrap_or(true);

        Some(bag.with(SeeReturnTypeData {
            code_location: context.code_location(),
            expected_return_type,
            invariant,
        }))
    }
}
