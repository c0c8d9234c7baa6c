//! Human-oriented type rendering.
//!
//! Unlike the canonical identity this output is meant to be read: class names
//! are shortened, callables show parameter names and non-list records are
//! broken over indented lines.

use crate::types::{
    ArrayType, Atomic, Callable, ClassString, GenericObject, ListType, NamedObject, Record,
    TemplateParam, Union,
};
use std::fmt::Write;

const INDENT: &str = "    ";

/// Pretty printer for show-type output.
pub struct TypePrettier;

impl TypePrettier {
    /// Render `union` surrounded by newlines, so it starts on a fresh line of
    /// the diagnostic.
    #[must_use]
    pub fn pretty(union: &Union) -> String {
        format!("\n{}\n", Self::union(union, 1))
    }

    /// Render without the surrounding newlines.
    #[must_use]
    pub fn inline(union: &Union) -> String {
        Self::union(union, 1)
    }

    fn union(union: &Union, level: usize) -> String {
        union
            .atomics()
            .iter()
            .map(|atomic| Self::atomic(atomic, level))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn atomic(atomic: &Atomic, level: usize) -> String {
        match atomic {
            Atomic::List(list) => Self::list(list, level),
            Atomic::Array(array) => Self::array(array, level),
            Atomic::Callable(callable) => Self::callable(callable, level),
            Atomic::ClassString(class_string) => Self::class_string(class_string),
            Atomic::LiteralClassString(literal) => {
                format!("{}::class", short_class_name(&literal.value))
            }
            Atomic::NamedObject(object) => Self::named_object(object, None, level),
            Atomic::GenericObject(generic) => {
                Self::named_object(&generic.object, Some(generic), level)
            }
            Atomic::Record(record) => Self::record(record, level),
            Atomic::TemplateParam(param) => Self::template_param(param, level),
            other => other.id(),
        }
    }

    fn list(list: &ListType, level: usize) -> String {
        let prefix = if list.non_empty { "non-empty-list" } else { "list" };
        format!("{prefix}<{}>", Self::union(&list.value, level))
    }

    fn array(array: &ArrayType, level: usize) -> String {
        let prefix = if array.non_empty { "non-empty-array" } else { "array" };
        format!(
            "{prefix}<{}, {}>",
            Self::union(&array.key, level),
            Self::union(&array.value, level)
        )
    }

    fn callable(callable: &Callable, level: usize) -> String {
        let params = callable
            .params
            .iter()
            .map(|param| {
                let ty = param
                    .ty
                    .as_ref()
                    .map_or_else(|| "mixed".to_string(), |ty| Self::union(ty, level));
                let by_ref = if param.by_ref { "&" } else { "" };
                let variadic = if param.variadic { "..." } else { "" };
                format!("{variadic}{ty} {by_ref}${}", param.name)
            })
            .collect::<Vec<_>>()
            .join(", ");

        let return_type = callable
            .return_type
            .as_ref()
            .map_or_else(|| "void".to_string(), |ty| Self::union(ty, level));
        let pure = if callable.is_pure { "pure-" } else { "" };
        let keyword = if callable.is_closure { "Closure" } else { "callable" };

        format!("{pure}{keyword}({params}): {return_type}")
    }

    fn class_string(class_string: &ClassString) -> String {
        match &class_string.as_type {
            Some(as_type) => format!("{}::class", short_class_name(as_type)),
            None => "class-string".to_string(),
        }
    }

    fn named_object(object: &NamedObject, generic: Option<&GenericObject>, level: usize) -> String {
        let mut out = short_class_name(&object.name).to_string();
        if let Some(generic) = generic {
            out.push('<');
            out.push_str(
                &generic
                    .type_params
                    .iter()
                    .map(|param| Self::union(param, level))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            out.push('>');
        }
        if !object.intersections.is_empty() {
            let facets = object
                .intersections
                .iter()
                .map(|facet| Self::atomic(facet, level))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(out, " & {facets}");
        }
        out
    }

    /// Lists print inline; keyed records get one property per line, indented
    /// by nesting level.
    fn record(record: &Record, level: usize) -> String {
        if record.is_list {
            let elements = record
                .properties
                .values()
                .map(|ty| Self::union(ty, level + 1))
                .collect::<Vec<_>>()
                .join(", ");
            return format!("array{{{elements}}}");
        }

        let mut out = String::from("array{\n");
        for (key, ty) in &record.properties {
            let optional = if ty.possibly_undefined { "?" } else { "" };
            let _ = writeln!(
                out,
                "{}{key}{optional}: {},",
                INDENT.repeat(level),
                Self::union(ty, level + 1)
            );
        }
        out.push_str(&INDENT.repeat(level - 1));
        out.push('}');
        out
    }

    fn template_param(param: &TemplateParam, level: usize) -> String {
        format!(
            "from {} as {}",
            short_class_name(&param.defining_scope),
            Self::union(&param.bound, level)
        )
    }
}

/// Last segment of a namespaced class name.
#[must_use]
pub fn short_class_name(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

#[cfg(test)]
#[path = "../tests/pretty_tests.rs"]
mod tests;
