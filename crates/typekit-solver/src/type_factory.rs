//! Shorthand constructors for common types.

use crate::types::{
    Atomic, Callable, ClassString, GenericObject, LiteralClassString, LiteralString, NamedObject,
    Record, RecordKey, Union,
};
use indexmap::IndexMap;

impl Union {
    #[must_use]
    pub fn mixed() -> Self {
        Self::single(Atomic::Mixed)
    }

    #[must_use]
    pub fn void() -> Self {
        Self::single(Atomic::Void)
    }

    #[must_use]
    pub fn null() -> Self {
        Self::single(Atomic::Null)
    }

    #[must_use]
    pub fn never() -> Self {
        Self::single(Atomic::Never)
    }

    #[must_use]
    pub fn int() -> Self {
        Self::single(Atomic::Int)
    }

    #[must_use]
    pub fn float() -> Self {
        Self::single(Atomic::Float)
    }

    #[must_use]
    pub fn string() -> Self {
        Self::single(Atomic::String)
    }

    #[must_use]
    pub fn bool() -> Self {
        Self::single(Atomic::Bool)
    }

    #[must_use]
    pub fn true_() -> Self {
        Self::single(Atomic::True)
    }

    #[must_use]
    pub fn false_() -> Self {
        Self::single(Atomic::False)
    }

    #[must_use]
    pub fn literal_string(value: impl Into<String>) -> Self {
        Self::single(Atomic::LiteralString(LiteralString {
            value: value.into(),
        }))
    }

    #[must_use]
    pub fn literal_int(value: i64) -> Self {
        Self::single(Atomic::LiteralInt(value))
    }

    #[must_use]
    pub fn literal_float(value: f64) -> Self {
        Self::single(Atomic::LiteralFloat(value))
    }

    #[must_use]
    pub fn literal_class_string(value: impl Into<String>) -> Self {
        Self::single(Atomic::LiteralClassString(LiteralClassString {
            value: value.into(),
        }))
    }

    #[must_use]
    pub fn class_string(as_type: Option<&str>) -> Self {
        Self::single(Atomic::ClassString(ClassString {
            as_type: as_type.map(str::to_string),
        }))
    }

    #[must_use]
    pub fn named_object(name: impl Into<String>) -> Self {
        Self::single(Atomic::NamedObject(NamedObject::new(name)))
    }

    #[must_use]
    pub fn generic_object(name: impl Into<String>, params: impl IntoIterator<Item = Union>) -> Self {
        Self::single(Atomic::GenericObject(GenericObject::new(name, params)))
    }

    /// A record whose list flag is derived from `properties`.
    #[must_use]
    pub fn record<K: Into<RecordKey>>(
        properties: impl IntoIterator<Item = (K, Union)>,
        sealed: bool,
    ) -> Self {
        let properties: IndexMap<RecordKey, Union> =
            properties.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::single(Atomic::Record(Record::new(properties, sealed)))
    }

    /// A sealed list record.
    #[must_use]
    pub fn list_record(elements: impl IntoIterator<Item = Union>) -> Self {
        Self::single(Atomic::Record(Record::list(elements)))
    }

    /// `Closure(): return_type` without parameters.
    #[must_use]
    pub fn closure(return_type: Option<Union>) -> Self {
        Self::single(Atomic::Callable(Callable {
            params: Vec::new(),
            return_type,
            is_closure: true,
            is_pure: false,
        }))
    }
}
