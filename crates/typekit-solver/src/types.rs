//! Type representation.
//!
//! A [`Union`] is a non-empty set of [`Atomic`] types plus a
//! `possibly_undefined` flag. The flag describes the *slot* the value lives in
//! (an optional record property), not the value itself, so it is not part of a
//! union's canonical identity.
//!
//! Atomics are stored behind an `Arc<[Atomic]>`: cloning a union or toggling
//! its flag never copies the atomic list.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A union of one or more atomic types.
#[derive(Clone, Debug, PartialEq)]
pub struct Union {
    atomics: Arc<[Atomic]>,
    pub possibly_undefined: bool,
}

impl Union {
    /// Build a union from atomics. Returns `None` for an empty input; atomics
    /// with the same canonical identity are kept once.
    pub fn new(atomics: impl IntoIterator<Item = Atomic>) -> Option<Self> {
        let mut unique: Vec<Atomic> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        for atomic in atomics {
            if seen.insert(atomic.id()) {
                unique.push(atomic);
            }
        }
        if unique.is_empty() {
            return None;
        }
        Some(Self {
            atomics: unique.into(),
            possibly_undefined: false,
        })
    }

    /// A union holding exactly one atomic.
    #[must_use]
    pub fn single(atomic: Atomic) -> Self {
        Self {
            atomics: Arc::from(vec![atomic]),
            possibly_undefined: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn atomics(&self) -> &[Atomic] {
        &self.atomics
    }

    #[inline]
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.atomics.len() == 1
    }

    /// A copy of this union with `atomic` added (if not already present).
    #[must_use]
    pub fn with_atomic(&self, atomic: Atomic) -> Self {
        let id = atomic.id();
        if self.atomics.iter().any(|a| a.id() == id) {
            return self.clone();
        }
        let mut atomics = self.atomics.to_vec();
        atomics.push(atomic);
        Self {
            atomics: atomics.into(),
            possibly_undefined: self.possibly_undefined,
        }
    }

    /// Merge the atomics of several unions. `None` if `unions` is empty.
    pub fn combine<'a>(unions: impl IntoIterator<Item = &'a Union>) -> Option<Self> {
        let mut possibly_undefined = false;
        let atomics: Vec<Atomic> = unions
            .into_iter()
            .flat_map(|u| {
                possibly_undefined |= u.possibly_undefined;
                u.atomics().iter().cloned()
            })
            .collect();
        Self::new(atomics).map(|mut u| {
            u.possibly_undefined = possibly_undefined;
            u
        })
    }

    /// Rebuild the union with `map` applied to every atomic.
    #[must_use]
    pub fn map_atomics(&self, mut map: impl FnMut(&Atomic) -> Atomic) -> Self {
        let mut rebuilt = Self::new(self.atomics.iter().map(&mut map))
            .unwrap_or_else(|| self.clone());
        rebuilt.possibly_undefined = self.possibly_undefined;
        rebuilt
    }
}

impl From<Atomic> for Union {
    fn from(atomic: Atomic) -> Self {
        Self::single(atomic)
    }
}

impl fmt::Display for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// One concrete type.
#[derive(Clone, Debug, PartialEq)]
pub enum Atomic {
    Mixed,
    Void,
    Null,
    Never,
    ArrayKey,
    String,
    NonEmptyString,
    Int,
    Float,
    Bool,
    True,
    False,
    LiteralString(LiteralString),
    LiteralInt(i64),
    LiteralFloat(f64),
    ClassString(ClassString),
    LiteralClassString(LiteralClassString),
    NamedObject(NamedObject),
    GenericObject(GenericObject),
    Record(Record),
    Callable(Callable),
    TemplateParam(TemplateParam),
    Array(ArrayType),
    List(ListType),
}

impl Atomic {
    /// Whether this atomic is a literal scalar (`'a'`, `1`, `1.5`, `Foo::class`, `true`, `false`).
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Atomic::LiteralString(_)
                | Atomic::LiteralInt(_)
                | Atomic::LiteralFloat(_)
                | Atomic::LiteralClassString(_)
                | Atomic::True
                | Atomic::False
        )
    }

    /// The object part of a named or generic object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&NamedObject> {
        match self {
            Atomic::NamedObject(object) => Some(object),
            Atomic::GenericObject(generic) => Some(&generic.object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut NamedObject> {
        match self {
            Atomic::NamedObject(object) => Some(object),
            Atomic::GenericObject(generic) => Some(&mut generic.object),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralString {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralClassString {
    pub value: String,
}

/// `class-string`, optionally bounded by a class (`class-string<Foo>`).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ClassString {
    pub as_type: Option<String>,
}

/// An object of a named class, possibly intersected with further facets.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedObject {
    pub name: String,
    /// Intersected facets, in the order they were added.
    pub intersections: Vec<Atomic>,
}

impl NamedObject {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intersections: Vec::new(),
        }
    }
}

/// A named object with type parameters (`Foo<int, string>`).
#[derive(Clone, Debug, PartialEq)]
pub struct GenericObject {
    pub object: NamedObject,
    pub type_params: SmallVec<[Union; 2]>,
}

impl GenericObject {
    #[must_use]
    pub fn new(name: impl Into<String>, type_params: impl IntoIterator<Item = Union>) -> Self {
        Self {
            object: NamedObject::new(name),
            type_params: type_params.into_iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.object.name
    }
}

/// Key of a record property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Int(i64),
    Str(String),
}

impl From<&str> for RecordKey {
    fn from(key: &str) -> Self {
        RecordKey::Str(key.to_string())
    }
}

impl From<i64> for RecordKey {
    fn from(key: i64) -> Self {
        RecordKey::Int(key)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Int(i) => write!(f, "{i}"),
            RecordKey::Str(s) => f.write_str(s),
        }
    }
}

/// A structural record (`array{a: int, b?: string}` / `list{int, string}`).
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub properties: IndexMap<RecordKey, Union>,
    pub sealed: bool,
    /// Keys are exactly `0..n` in order and none is possibly undefined.
    pub is_list: bool,
}

impl Record {
    /// A record whose `is_list` flag is derived from its keys.
    #[must_use]
    pub fn new(properties: IndexMap<RecordKey, Union>, sealed: bool) -> Self {
        let is_list = Self::has_list_keys(&properties);
        Self {
            properties,
            sealed,
            is_list,
        }
    }

    /// A sealed list record over `elements`.
    #[must_use]
    pub fn list(elements: impl IntoIterator<Item = Union>) -> Self {
        let properties = elements
            .into_iter()
            .enumerate()
            .map(|(i, ty)| (RecordKey::Int(i as i64), ty))
            .collect();
        Self::new(properties, true)
    }

    /// Whether the keys form the dense sequence `0..n` with every slot defined.
    #[must_use]
    pub fn has_list_keys(properties: &IndexMap<RecordKey, Union>) -> bool {
        properties
            .iter()
            .enumerate()
            .all(|(i, (key, ty))| *key == RecordKey::Int(i as i64) && !ty.possibly_undefined)
    }

    /// Union of all key types (`int`/`string` literals).
    #[must_use]
    pub fn generic_key_type(&self) -> Union {
        Union::new(self.properties.keys().map(|key| match key {
            RecordKey::Int(i) => Atomic::LiteralInt(*i),
            RecordKey::Str(s) => Atomic::LiteralString(LiteralString { value: s.clone() }),
        }))
        .unwrap_or_else(|| Union::single(Atomic::Never))
    }

    /// Union of all property types.
    #[must_use]
    pub fn generic_value_type(&self) -> Union {
        Union::combine(self.properties.values())
            .map(|mut u| {
                u.possibly_undefined = false;
                u
            })
            .unwrap_or_else(|| Union::single(Atomic::Never))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallableParam {
    pub name: String,
    /// `None` for an untyped parameter.
    pub ty: Option<Union>,
    pub by_ref: bool,
    pub variadic: bool,
    pub optional: bool,
}

impl CallableParam {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Union) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            by_ref: false,
            variadic: false,
            optional: false,
        }
    }
}

/// `Closure(...)` or `callable(...)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Callable {
    pub params: Vec<CallableParam>,
    /// `None` when the return type was not declared or inferred.
    pub return_type: Option<Union>,
    pub is_closure: bool,
    pub is_pure: bool,
}

/// A template parameter `T` declared by `defining_scope`, bounded by `bound`.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateParam {
    pub name: String,
    pub defining_scope: String,
    pub bound: Union,
}

/// `array<K, V>` / `non-empty-array<K, V>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayType {
    pub key: Union,
    pub value: Union,
    pub non_empty: bool,
}

/// `list<V>` / `non-empty-list<V>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub value: Union,
    pub non_empty: bool,
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
