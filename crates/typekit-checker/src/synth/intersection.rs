use super::{MethodReturnTypeProvider, wrap};
use crate::call_args::CallArg;
use crate::syntax::MethodReturnTypeEvent;
use typekit_solver::{
    Atomic, Record, Union, add_intersection, as_single_atomic_of, as_single_object,
    unwrap_generic,
};

/// `intersection([A, B, C])`: `A & B & C`. The first element carries the
/// intersection; the others become its facets in argument order. Generic
/// objects keep their type parameters.
#[must_use]
pub fn intersection(args: &[CallArg], wrapper: &str) -> Option<Union> {
    let list = as_single_atomic_of::<Record>(&args.first()?.ty).filter(|record| record.is_list)?;

    let objects = list
        .properties
        .values()
        .map(|wrapped| unwrap_generic(wrapped, wrapper).and_then(as_single_object))
        .collect::<Option<Vec<&Atomic>>>()?;

    let (carrier, facets) = objects.split_first()?;
    let mut intersected = (*carrier).clone();
    for facet in facets {
        intersected = add_intersection(&intersected, (*facet).clone())?;
    }

    Some(wrap(wrapper, Union::single(intersected)))
}

pub struct IntersectionReturnTypeProvider {
    wrapper: String,
}

impl IntersectionReturnTypeProvider {
    #[must_use]
    pub fn new(wrapper: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
        }
    }
}

impl MethodReturnTypeProvider for IntersectionReturnTypeProvider {
    fn method_name(&self) -> &'static str {
        "intersection"
    }

    fn get_method_return_type(&self, event: &MethodReturnTypeEvent<'_>) -> Option<Union> {
        let args = CallArg::resolve_all(event.call_args, event.source)?;
        intersection(&args, &self.wrapper)
    }
}
