//! Canonical string identity of types.
//!
//! Two unions are the same type iff their identities are equal. A union's
//! identity is the sorted, de-duplicated identities of its atomics joined by
//! `|`, so atomic order never matters.

use crate::types::{Atomic, Callable, NamedObject, Record, RecordKey, Union};
use std::fmt::Write;

impl Union {
    /// Canonical identity, e.g. `int|string` or `array{a: int, b?: string}`.
    #[must_use]
    pub fn id(&self) -> String {
        let mut ids: Vec<String> = self.atomics().iter().map(Atomic::id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.join("|")
    }
}

impl Atomic {
    /// Canonical identity of a single atomic.
    #[must_use]
    pub fn id(&self) -> String {
        let mut out = String::new();
        write_atomic(&mut out, self);
        out
    }
}

fn write_atomic(out: &mut String, atomic: &Atomic) {
    match atomic {
        Atomic::Mixed => out.push_str("mixed"),
        Atomic::Void => out.push_str("void"),
        Atomic::Null => out.push_str("null"),
        Atomic::Never => out.push_str("never"),
        Atomic::ArrayKey => out.push_str("array-key"),
        Atomic::String => out.push_str("string"),
        Atomic::NonEmptyString => out.push_str("non-empty-string"),
        Atomic::Int => out.push_str("int"),
        Atomic::Float => out.push_str("float"),
        Atomic::Bool => out.push_str("bool"),
        Atomic::True => out.push_str("true"),
        Atomic::False => out.push_str("false"),
        Atomic::LiteralString(literal) => {
            let _ = write!(out, "'{}'", literal.value);
        }
        Atomic::LiteralInt(value) => {
            let _ = write!(out, "{value}");
        }
        Atomic::LiteralFloat(value) => {
            let _ = write!(out, "float({value})");
        }
        Atomic::ClassString(class_string) => match &class_string.as_type {
            Some(as_type) => {
                let _ = write!(out, "class-string<{as_type}>");
            }
            None => out.push_str("class-string"),
        },
        Atomic::LiteralClassString(literal) => {
            let _ = write!(out, "{}::class", literal.value);
        }
        Atomic::NamedObject(object) => write_object(out, object, None),
        Atomic::GenericObject(generic) => {
            write_object(out, &generic.object, Some(generic.type_params.as_slice()))
        }
        Atomic::Record(record) => write_record(out, record),
        Atomic::Callable(callable) => write_callable(out, callable),
        Atomic::TemplateParam(param) => {
            let _ = write!(
                out,
                "{}:{} as {}",
                param.name,
                param.defining_scope,
                param.bound.id()
            );
        }
        Atomic::Array(array) => {
            let prefix = if array.non_empty { "non-empty-array" } else { "array" };
            let _ = write!(out, "{prefix}<{}, {}>", array.key.id(), array.value.id());
        }
        Atomic::List(list) => {
            let prefix = if list.non_empty { "non-empty-list" } else { "list" };
            let _ = write!(out, "{prefix}<{}>", list.value.id());
        }
    }
}

fn write_object(out: &mut String, object: &NamedObject, type_params: Option<&[Union]>) {
    out.push_str(&object.name);
    if let Some(params) = type_params {
        out.push('<');
        write_joined(out, params.iter().map(Union::id));
        out.push('>');
    }
    for facet in &object.intersections {
        out.push('&');
        write_atomic(out, facet);
    }
}

fn write_record(out: &mut String, record: &Record) {
    if record.is_list {
        out.push_str("list{");
        write_joined(out, record.properties.values().map(Union::id));
    } else {
        out.push_str("array{");
        write_joined(
            out,
            record.properties.iter().map(|(key, ty)| {
                let optional = if ty.possibly_undefined { "?" } else { "" };
                format!("{}{optional}: {}", key_id(key), ty.id())
            }),
        );
    }
    if !record.sealed {
        if !record.properties.is_empty() {
            out.push_str(", ");
        }
        out.push_str("...<array-key, mixed>");
    }
    out.push('}');
}

fn write_callable(out: &mut String, callable: &Callable) {
    if callable.is_pure {
        out.push_str("pure-");
    }
    out.push_str(if callable.is_closure { "Closure(" } else { "callable(" });
    write_joined(
        out,
        callable.params.iter().map(|param| {
            let ty = param.ty.as_ref().map_or_else(|| "mixed".to_string(), Union::id);
            let by_ref = if param.by_ref { "&" } else { "" };
            let variadic = if param.variadic { "..." } else { "" };
            let optional = if param.optional { "=" } else { "" };
            format!("{by_ref}{ty}{variadic}{optional}")
        }),
    );
    out.push(')');
    if let Some(return_type) = &callable.return_type {
        let _ = write!(out, ":{}", return_type.id());
    }
}

/// Keys that are not plain identifiers are quoted.
pub(crate) fn key_id(key: &RecordKey) -> String {
    match key {
        RecordKey::Int(i) => i.to_string(),
        RecordKey::Str(s) if is_identifier(s) => s.clone(),
        RecordKey::Str(s) => format!("'{s}'"),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn write_joined(out: &mut String, parts: impl Iterator<Item = String>) {
    for (i, part) in parts.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&part);
    }
}

#[cfg(test)]
#[path = "../tests/canonical_tests.rs"]
mod tests;
