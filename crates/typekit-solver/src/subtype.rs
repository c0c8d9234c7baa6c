//! Subtype relation.
//!
//! The plugin never decides containment itself in production: the host's
//! checker is the oracle (`SubtypeOracle`). `StructuralSubtypeChecker` is a
//! self-contained implementation of the same relation over this crate's type
//! model, used by the in-memory host and by embedders without a checker of
//! their own. Nominal relationships come from a `ClassHierarchy`.

use crate::types::{ArrayType, Atomic, Callable, GenericObject, ListType, NamedObject, Record, Union};
use tracing::trace;

/// Maximum nesting depth explored by `StructuralSubtypeChecker` before it
/// answers "not contained".
pub const MAX_SUBTYPE_DEPTH: u32 = 64;

/// Host-provided subtype relation.
pub trait SubtypeOracle {
    /// Whether every value of `input` is a value of `container`.
    fn is_contained_by(&self, input: &Union, container: &Union) -> bool;
}

/// Nominal class relationships.
pub trait ClassHierarchy {
    /// Whether `child` is `parent` or inherits from / implements it.
    fn is_same_or_subclass(&self, child: &str, parent: &str) -> bool;
}

/// A hierarchy where classes are only related to themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHierarchy;

impl ClassHierarchy for NoopHierarchy {
    fn is_same_or_subclass(&self, child: &str, parent: &str) -> bool {
        child.eq_ignore_ascii_case(parent)
    }
}

/// Structural subtype checker over the plugin's type model.
pub struct StructuralSubtypeChecker<'a> {
    hierarchy: &'a dyn ClassHierarchy,
}

impl<'a> StructuralSubtypeChecker<'a> {
    pub fn new(hierarchy: &'a dyn ClassHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Every atomic of `input` must be contained by some atomic of `container`.
    fn union_contained(&self, input: &Union, container: &Union, depth: u32) -> bool {
        if depth > MAX_SUBTYPE_DEPTH {
            trace!(depth, "subtype depth exceeded");
            return false;
        }
        input
            .atomics()
            .iter()
            .all(|a| self.atomic_in_union(a, container, depth))
    }

    fn atomic_contained(&self, input: &Atomic, container: &Atomic, depth: u32) -> bool {
        use Atomic::*;

        match (input, container) {
            (_, Mixed) | (Never, _) => true,
            (Mixed, _) => false,

            (LiteralString(_) | NonEmptyString | String, String) => true,
            (LiteralString(literal), NonEmptyString) => !literal.value.is_empty(),
            (NonEmptyString, NonEmptyString) => true,
            (LiteralString(a), LiteralString(c)) => a.value == c.value,
            (ClassString(_) | LiteralClassString(_), String | NonEmptyString) => true,

            (LiteralInt(_) | Int, Int) => true,
            (LiteralInt(a), LiteralInt(c)) => a == c,
            (LiteralFloat(_) | Float, Float) => true,
            (LiteralFloat(a), LiteralFloat(c)) => a == c,

            (True | False | Bool, Bool) | (True, True) | (False, False) => true,

            (
                String | NonEmptyString | LiteralString(_) | ClassString(_)
                | LiteralClassString(_) | Int | LiteralInt(_) | ArrayKey,
                ArrayKey,
            ) => true,

            (LiteralClassString(a), LiteralClassString(c)) => {
                a.value.eq_ignore_ascii_case(&c.value)
            }
            (LiteralClassString(a), ClassString(c)) => c
                .as_type
                .as_deref()
                .is_none_or(|bound| self.hierarchy.is_same_or_subclass(&a.value, bound)),
            (ClassString(a), ClassString(c)) => match (&a.as_type, &c.as_type) {
                (_, None) => true,
                (Some(a), Some(c)) => self.hierarchy.is_same_or_subclass(a, c),
                (None, Some(_)) => false,
            },

            (NamedObject(_) | GenericObject(_), NamedObject(c)) => {
                input.as_object().is_some_and(|a| self.object_contained(a, c))
            }
            (GenericObject(a), GenericObject(c)) => self.generic_contained(a, c, depth),
            (NamedObject(a), GenericObject(c)) => {
                self.object_contained(a, &c.object)
                    && c.type_params
                        .iter()
                        .all(|param| param.atomics().iter().all(|p| *p == Mixed))
            }

            (Record(a), Record(c)) => self.record_contained(a, c, depth),
            (Record(a), Array(c)) => self.record_in_array(a, c, depth),
            (Record(a), List(c)) => self.record_in_list(a, c, depth),
            (List(a), List(c)) => {
                (a.non_empty || !c.non_empty) && self.union_contained(&a.value, &c.value, depth)
            }
            (List(a), Array(c)) => {
                (a.non_empty || !c.non_empty)
                    && self.atomic_in_union(&Int, &c.key, depth)
                    && self.union_contained(&a.value, &c.value, depth)
            }
            (Array(a), Array(c)) => {
                (a.non_empty || !c.non_empty)
                    && self.union_contained(&a.key, &c.key, depth)
                    && self.union_contained(&a.value, &c.value, depth)
            }

            (Callable(a), Callable(c)) => self.callable_contained(a, c, depth),

            (TemplateParam(a), TemplateParam(c)) => {
                a.name == c.name && a.defining_scope == c.defining_scope
            }

            (Void, Void) | (Null, Null) | (ArrayKey, ArrayKey) => true,

            _ => false,
        }
    }

    /// A template parameter not matched by name is judged by its whole bound
    /// against the whole container.
    fn atomic_in_union(&self, atomic: &Atomic, container: &Union, depth: u32) -> bool {
        let matched = container
            .atomics()
            .iter()
            .any(|c| self.atomic_contained(atomic, c, depth + 1));
        match atomic {
            Atomic::TemplateParam(param) if !matched => {
                self.union_contained(&param.bound, container, depth + 1)
            }
            _ => matched,
        }
    }

    /// `input` must reach the container's class through its own class or one
    /// of its facets, and must satisfy every facet of the container.
    fn object_contained(&self, input: &NamedObject, container: &NamedObject) -> bool {
        let reaches = |target: &str| {
            self.hierarchy.is_same_or_subclass(&input.name, target)
                || input.intersections.iter().any(|facet| {
                    facet
                        .as_object()
                        .is_some_and(|f| self.hierarchy.is_same_or_subclass(&f.name, target))
                })
        };

        reaches(&container.name)
            && container
                .intersections
                .iter()
                .filter_map(Atomic::as_object)
                .all(|facet| reaches(&facet.name))
    }

    /// Same class: parameters are compared covariantly. A subclass is accepted
    /// on its nominal relationship alone since parameter mapping across
    /// inheritance is not modelled.
    fn generic_contained(&self, input: &GenericObject, container: &GenericObject, depth: u32) -> bool {
        if !self.object_contained(&input.object, &container.object) {
            return false;
        }
        if !input.name().eq_ignore_ascii_case(container.name()) {
            return true;
        }
        input.type_params.len() == container.type_params.len()
            && input
                .type_params
                .iter()
                .zip(container.type_params.iter())
                .all(|(a, c)| self.union_contained(a, c, depth))
    }

    /// An unsealed input may hold keys beyond its listed properties, so it
    /// never fits a sealed container.
    fn record_contained(&self, input: &Record, container: &Record, depth: u32) -> bool {
        if container.sealed && !input.sealed {
            return false;
        }
        for (key, container_ty) in &container.properties {
            match input.properties.get(key) {
                Some(input_ty) => {
                    if input_ty.possibly_undefined && !container_ty.possibly_undefined {
                        return false;
                    }
                    if !self.union_contained(input_ty, container_ty, depth) {
                        return false;
                    }
                }
                None if container_ty.possibly_undefined => {}
                None => return false,
            }
        }

        if container.sealed {
            input
                .properties
                .keys()
                .all(|key| container.properties.contains_key(key))
        } else {
            true
        }
    }

    /// The unlisted keys of an unsealed input are `array-key => mixed`.
    fn record_in_array(&self, input: &Record, container: &ArrayType, depth: u32) -> bool {
        if !input.sealed
            && !(self.atomic_in_union(&Atomic::ArrayKey, &container.key, depth)
                && self.atomic_in_union(&Atomic::Mixed, &container.value, depth))
        {
            return false;
        }
        let has_required = input.properties.values().any(|ty| !ty.possibly_undefined);
        (has_required || !container.non_empty)
            && (input.properties.is_empty()
                || (self.union_contained(&input.generic_key_type(), &container.key, depth)
                    && self.union_contained(&input.generic_value_type(), &container.value, depth)))
    }

    /// Unlisted `array-key` keys of an unsealed input cannot be list keys.
    fn record_in_list(&self, input: &Record, container: &ListType, depth: u32) -> bool {
        input.is_list
            && input.sealed
            && (!input.properties.is_empty() || !container.non_empty)
            && input
                .properties
                .values()
                .all(|ty| self.union_contained(ty, &container.value, depth))
    }

    /// Parameters are contravariant, the return type covariant. A closure is a
    /// callable; a plain callable is not a closure.
    fn callable_contained(&self, input: &Callable, container: &Callable, depth: u32) -> bool {
        if container.is_closure && !input.is_closure {
            return false;
        }
        if container.is_pure && !input.is_pure {
            return false;
        }

        let required = input
            .params
            .iter()
            .filter(|p| !p.optional && !p.variadic)
            .count();
        if required > container.params.len() {
            return false;
        }

        for (i, container_param) in container.params.iter().enumerate() {
            let input_param = input
                .params
                .get(i)
                .or_else(|| input.params.last().filter(|p| p.variadic));
            let Some(input_param) = input_param else {
                continue;
            };
            if let (Some(input_ty), Some(container_ty)) = (&input_param.ty, &container_param.ty)
                && !self.union_contained(container_ty, input_ty, depth)
            {
                return false;
            }
        }

        match (&input.return_type, &container.return_type) {
            (_, None) => true,
            (None, Some(container_ret)) => container_ret.atomics().contains(&Atomic::Mixed),
            (Some(input_ret), Some(container_ret)) => {
                self.union_contained(input_ret, container_ret, depth)
            }
        }
    }
}

impl SubtypeOracle for StructuralSubtypeChecker<'_> {
    fn is_contained_by(&self, input: &Union, container: &Union) -> bool {
        self.union_contained(input, container, 0)
    }
}

#[cfg(test)]
#[path = "../tests/subtype_tests.rs"]
mod tests;
