//! Narrowing unions to a single atomic of an expected variant.
//!
//! Every reader of host-inferred types goes through these helpers. They return
//! `None` on anything unexpected, so callers can chain them with `?` and treat
//! a failed narrowing as "this call does not have the shape we handle".

use crate::types::{
    ArrayType, Atomic, Callable, ClassString, GenericObject, ListType, LiteralClassString,
    LiteralString, NamedObject, Record, TemplateParam, Union,
};
use tracing::trace;

/// An atomic variant a union can be narrowed to.
pub trait AtomicVariant {
    /// Variant name used in trace output.
    const NAME: &'static str;

    fn narrow(atomic: &Atomic) -> Option<&Self>;
}

macro_rules! atomic_variant {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl AtomicVariant for $ty {
            const NAME: &'static str = $name;

            #[inline]
            fn narrow(atomic: &Atomic) -> Option<&Self> {
                match atomic {
                    Atomic::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

atomic_variant!(GenericObject, GenericObject, "GenericObject");
atomic_variant!(Record, Record, "Record");
atomic_variant!(Callable, Callable, "Callable");
atomic_variant!(TemplateParam, TemplateParam, "TemplateParam");
atomic_variant!(ArrayType, Array, "Array");
atomic_variant!(ListType, List, "List");
atomic_variant!(ClassString, ClassString, "ClassString");
atomic_variant!(LiteralString, LiteralString, "LiteralString");
atomic_variant!(LiteralClassString, LiteralClassString, "LiteralClassString");

/// A generic object is also a named object.
impl AtomicVariant for NamedObject {
    const NAME: &'static str = "NamedObject";

    #[inline]
    fn narrow(atomic: &Atomic) -> Option<&Self> {
        atomic.as_object()
    }
}

/// The atomic of a union holding exactly one.
#[must_use]
pub fn as_single_atomic(union: &Union) -> Option<&Atomic> {
    match union.atomics() {
        [atomic] => Some(atomic),
        _ => None,
    }
}

/// The atomic of a single-atomic union, if it is of variant `V`.
#[must_use]
pub fn as_single_atomic_of<V: AtomicVariant>(union: &Union) -> Option<&V> {
    let narrowed = as_single_atomic(union).and_then(V::narrow);
    if narrowed.is_none() {
        trace!(ty = %union, expected = V::NAME, "narrowing failed");
    }
    narrowed
}

/// The single atomic if it is a named or generic object, returned whole.
#[must_use]
pub fn as_single_object(union: &Union) -> Option<&Atomic> {
    as_single_atomic(union).filter(|atomic| atomic.as_object().is_some())
}

/// Value of a single literal string.
#[must_use]
pub fn literal_string_value(union: &Union) -> Option<&str> {
    as_single_atomic_of::<LiteralString>(union).map(|literal| literal.value.as_str())
}

/// Value of a single literal class string.
#[must_use]
pub fn literal_class_string_value(union: &Union) -> Option<&str> {
    as_single_atomic_of::<LiteralClassString>(union).map(|literal| literal.value.as_str())
}

/// Value of a single `true` or `false`.
#[must_use]
pub fn bool_literal_value(union: &Union) -> Option<bool> {
    match as_single_atomic(union)? {
        Atomic::True => Some(true),
        Atomic::False => Some(false),
        _ => None,
    }
}

/// Type parameter at `position` of `from`, only if `from` is an `of` object.
#[must_use]
pub fn get_generic<'a>(from: &'a GenericObject, of: &str, position: usize) -> Option<&'a Union> {
    if from.name() != of {
        return None;
    }
    from.type_params.get(position)
}

#[must_use]
pub fn get_first_generic<'a>(from: &'a GenericObject, of: &str) -> Option<&'a Union> {
    get_generic(from, of, 0)
}

#[must_use]
pub fn get_second_generic<'a>(from: &'a GenericObject, of: &str) -> Option<&'a Union> {
    get_generic(from, of, 1)
}

/// Unwrap `Wrapper<T>` to `T`: narrow to a generic object of class `wrapper`
/// and take its first type parameter.
#[must_use]
pub fn unwrap_generic<'a>(union: &'a Union, wrapper: &str) -> Option<&'a Union> {
    as_single_atomic_of::<GenericObject>(union).and_then(|generic| get_first_generic(generic, wrapper))
}

#[cfg(test)]
#[path = "../tests/narrowing_tests.rs"]
mod tests;
