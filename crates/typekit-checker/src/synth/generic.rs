use super::{MethodReturnTypeProvider, wrap};
use crate::call_args::CallArg;
use crate::syntax::MethodReturnTypeEvent;
use typekit_solver::{
    Record, Union, as_single_atomic_of, literal_class_string_value, unwrap_generic,
};

/// `generic(Foo::class, [T1, T2])`: `Foo<T1, T2>`. The parameter list must be
/// a non-empty list record.
#[must_use]
pub fn generic(args: &[CallArg], wrapper: &str) -> Option<Union> {
    let class = literal_class_string_value(&args.first()?.ty)?;
    let list = as_single_atomic_of::<Record>(&args.get(1)?.ty).filter(|record| record.is_list)?;

    let params = list
        .properties
        .values()
        .map(|wrapped| unwrap_generic(wrapped, wrapper).cloned())
        .collect::<Option<Vec<Union>>>()?;
    if params.is_empty() {
        return None;
    }

    Some(wrap(wrapper, Union::generic_object(class, params)))
}

pub struct GenericObjectReturnTypeProvider {
    wrapper: String,
}

impl GenericObjectReturnTypeProvider {
    #[must_use]
    pub fn new(wrapper: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
        }
    }
}

impl MethodReturnTypeProvider for GenericObjectReturnTypeProvider {
    fn method_name(&self) -> &'static str {
        "generic"
    }

    fn get_method_return_type(&self, event: &MethodReturnTypeEvent<'_>) -> Option<Union> {
        let args = CallArg::resolve_all(event.call_args, event.source)?;
        generic(&args, &self.wrapper)
    }
}
