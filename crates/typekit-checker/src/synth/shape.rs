use super::{MethodReturnTypeProvider, wrap};
use crate::call_args::CallArg;
use crate::syntax::MethodReturnTypeEvent;
use indexmap::IndexMap;
use typekit_solver::{Atomic, Record, Union, as_single_atomic_of, unwrap_generic};

/// `shape(['a' => T1, 'b' => T2])`: unwrap every property of the record
/// argument. A possibly-undefined property makes the result a keyed record
/// even when the keys are `0..n`; sealedness is copied from the input.
#[must_use]
pub fn shape(args: &[CallArg], wrapper: &str) -> Option<Union> {
    let input = as_single_atomic_of::<Record>(&args.first()?.ty)?;

    let mut properties = IndexMap::with_capacity(input.properties.len());
    let mut all_keys_defined = true;
    for (key, wrapped) in &input.properties {
        let ty = unwrap_generic(wrapped, wrapper)?;
        all_keys_defined &= !ty.possibly_undefined;
        properties.insert(key.clone(), ty.clone());
    }

    let record = Record {
        properties,
        sealed: input.sealed,
        is_list: all_keys_defined && input.is_list,
    };
    Some(wrap(wrapper, Union::single(Atomic::Record(record))))
}

pub struct ShapeReturnTypeProvider {
    wrapper: String,
}

impl ShapeReturnTypeProvider {
    #[must_use]
    pub fn new(wrapper: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
        }
    }
}

impl MethodReturnTypeProvider for ShapeReturnTypeProvider {
    fn method_name(&self) -> &'static str {
        "shape"
    }

    fn get_method_return_type(&self, event: &MethodReturnTypeEvent<'_>) -> Option<Union> {
        let args = CallArg::resolve_all(event.call_args, event.source)?;
        shape(&args, &self.wrapper)
    }
}
