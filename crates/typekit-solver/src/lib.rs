//! Type Model for the typekit checker plugin.
//!
//! Types are unions of atomics compared by canonical identity (`Union::id`).
//! The crate is pure: it never reports diagnostics and never consults the
//! host except through the `SubtypeOracle` and `ClassHierarchy` traits.
//!
//! - `types`: the `Union` / `Atomic` representation
//! - `canonical`: canonical identity strings
//! - `narrowing`: "exactly one atomic of variant V" helpers
//! - `type_ops`: equality, containment, widening and flag toggles
//! - `subtype`: the subtype oracle and a structural fallback checker
//! - `pretty`: human-oriented rendering for show-type output
pub mod canonical;
pub mod narrowing;
pub mod pretty;
pub mod subtype;
mod type_factory;
pub mod type_ops;
pub mod types;

pub use narrowing::{
    AtomicVariant, as_single_atomic, as_single_atomic_of, as_single_object, bool_literal_value,
    get_first_generic, get_generic, get_second_generic, literal_class_string_value,
    literal_string_value, unwrap_generic,
};
pub use pretty::{TypePrettier, short_class_name};
pub use subtype::{
    ClassHierarchy, MAX_SUBTYPE_DEPTH, NoopHierarchy, StructuralSubtypeChecker, SubtypeOracle,
};
pub use type_ops::{
    add_intersection, as_always_defined, as_non_literal_type, as_nullable, as_possibly_undefined,
    is_type_contained_by_type, is_type_equals_to_type,
};
pub use types::{
    ArrayType, Atomic, Callable, CallableParam, ClassString, GenericObject, ListType,
    LiteralClassString, LiteralString, NamedObject, Record, RecordKey, TemplateParam, Union,
};
