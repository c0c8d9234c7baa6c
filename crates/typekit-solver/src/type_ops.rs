//! Type comparison and rebuilding helpers.
//!
//! All operations return new values; inputs are never mutated.

use crate::subtype::SubtypeOracle;
use crate::types::{ArrayType, Atomic, ClassString, ListType, Record, Union};

/// Identity equality on canonical strings.
#[must_use]
pub fn is_type_equals_to_type(a: &Union, b: &Union) -> bool {
    a.id() == b.id()
}

/// `input ⊑ container`, as decided by the host's subtype oracle.
#[must_use]
pub fn is_type_contained_by_type(
    oracle: &dyn SubtypeOracle,
    input: &Union,
    container: &Union,
) -> bool {
    oracle.is_contained_by(input, container)
}

#[must_use]
pub fn as_possibly_undefined(union: &Union) -> Union {
    let mut copy = union.clone();
    copy.possibly_undefined = true;
    copy
}

#[must_use]
pub fn as_always_defined(union: &Union) -> Union {
    let mut copy = union.clone();
    copy.possibly_undefined = false;
    copy
}

#[must_use]
pub fn as_nullable(union: &Union) -> Union {
    union.with_atomic(Atomic::Null)
}

/// A copy of the object atomic `to` with `facet` added to its intersections.
/// `None` if `to` is not a named or generic object.
#[must_use]
pub fn add_intersection(to: &Atomic, facet: Atomic) -> Option<Atomic> {
    let mut copy = to.clone();
    copy.as_object_mut()?.intersections.push(facet);
    Some(copy)
}

/// Widen every literal to its general form, recursing into records, lists,
/// arrays and generic objects.
#[must_use]
pub fn as_non_literal_type(union: &Union) -> Union {
    union.map_atomics(widen_atomic)
}

fn widen_atomic(atomic: &Atomic) -> Atomic {
    match atomic {
        Atomic::LiteralClassString(_) => Atomic::ClassString(ClassString::default()),
        Atomic::LiteralString(literal) if literal.value.is_empty() => Atomic::String,
        Atomic::LiteralString(_) => Atomic::NonEmptyString,
        Atomic::LiteralInt(_) => Atomic::Int,
        Atomic::LiteralFloat(_) => Atomic::Float,
        Atomic::Record(record) => widen_record(record),
        Atomic::List(list) => Atomic::List(ListType {
            value: as_non_literal_type(&list.value),
            non_empty: list.non_empty,
        }),
        Atomic::Array(array) => Atomic::Array(ArrayType {
            key: as_non_literal_type(&array.key),
            value: as_non_literal_type(&array.value),
            non_empty: array.non_empty,
        }),
        Atomic::GenericObject(generic) => {
            let mut widened = generic.clone();
            for param in widened.type_params.iter_mut() {
                *param = as_non_literal_type(param);
            }
            Atomic::GenericObject(widened)
        }
        other => other.clone(),
    }
}

fn widen_record(record: &Record) -> Atomic {
    let value = as_non_literal_type(&record.generic_value_type());
    if record.is_list {
        Atomic::List(ListType {
            value,
            non_empty: true,
        })
    } else {
        Atomic::Array(ArrayType {
            key: as_non_literal_type(&record.generic_key_type()),
            value,
            non_empty: true,
        })
    }
}

#[cfg(test)]
#[path = "../tests/type_ops_tests.rs"]
mod tests;
