use super::{MethodReturnTypeProvider, wrap};
use crate::syntax::MethodReturnTypeEvent;
use typekit_solver::{Union, as_possibly_undefined};

/// `optional(T)`: the first inferred template parameter, marked possibly
/// undefined. Applying it twice leaves the flag set once.
#[must_use]
pub fn optional(template_params: Option<&[Union]>, wrapper: &str) -> Option<Union> {
    let first = template_params?.first()?;
    Some(wrap(wrapper, as_possibly_undefined(first)))
}

pub struct OptionalReturnTypeProvider {
    wrapper: String,
}

impl OptionalReturnTypeProvider {
    #[must_use]
    pub fn new(wrapper: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
        }
    }
}

impl MethodReturnTypeProvider for OptionalReturnTypeProvider {
    fn method_name(&self) -> &'static str {
        "optional"
    }

    fn get_method_return_type(&self, event: &MethodReturnTypeEvent<'_>) -> Option<Union> {
        optional(event.template_type_parameters, &self.wrapper)
    }
}
