//! Assertion data and the per-method assertion bag.
//!
//! Assertions are gathered in two phases:
//!
//! 1. **Collection** runs after each assertion call expression (0..n times
//!    per test method). A collector reads the call's argument types and folds
//!    what it found into the method's [`AssertionBag`].
//! 2. **Reconciliation** runs once per test method body, strictly after its
//!    last collection. Reconcilers judge the finished bag and emit at most one
//!    diagnostic each.

pub mod collector;
pub mod reconciler;
mod registry;

pub use registry::{AssertionKey, AssertionRegistry};

use rustc_hash::FxHashMap;
use std::fmt;
use typekit_common::CodeLocation;
use typekit_solver::Union;

/// Assertion call names, matched exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssertionName {
    HaveCode,
    SeeReturnType,
    SeePsalmIssue,
}

impl AssertionName {
    #[must_use]
    pub fn from_method_name(name: &str) -> Option<Self> {
        match name {
            "haveCode" => Some(Self::HaveCode),
            "seeReturnType" => Some(Self::SeeReturnType),
            "seePsalmIssue" => Some(Self::SeePsalmIssue),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HaveCode => "haveCode",
            Self::SeeReturnType => "seeReturnType",
            Self::SeePsalmIssue => "seePsalmIssue",
        }
    }
}

impl fmt::Display for AssertionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an entry in an assertion bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    HaveCode,
    SeeReturnType,
    SeePsalmIssues,
}

/// The code block under test and its inferred return type.
#[derive(Clone, Debug, PartialEq)]
pub struct HaveCodeData {
    /// Location of the function literal passed to `haveCode`.
    pub code_location: CodeLocation,
    pub actual_return_type: Union,
}

/// The expected return type of the code block.
#[derive(Clone, Debug, PartialEq)]
pub struct SeeReturnTypeData {
    /// Location of the `seeReturnType` call.
    pub code_location: CodeLocation,
    pub expected_return_type: Union,
    /// Compare by identity rather than containment.
    pub invariant: bool,
}

/// One issue the code block is expected to raise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpectedIssue {
    pub kind: String,
    pub message: String,
}

impl ExpectedIssue {
    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Matching key: `[kind]:[message]`.
    #[must_use]
    pub fn key(&self) -> String {
        issue_key(&self.kind, &self.message)
    }
}

/// Matching key shared by expected and recorded issues.
#[must_use]
pub fn issue_key(kind: &str, message: &str) -> String {
    format!("[{kind}]:[{message}]")
}

/// Issues expected from the code block, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeePsalmIssuesData {
    /// Location of the first `seePsalmIssue` call.
    pub code_location: CodeLocation,
    pub issues: Vec<ExpectedIssue>,
}

impl SeePsalmIssuesData {
    #[must_use]
    pub const fn empty(code_location: CodeLocation) -> Self {
        Self {
            code_location,
            issues: Vec::new(),
        }
    }

    /// A copy with `issue` appended; the location is kept.
    #[must_use]
    pub fn concat(&self, issue: ExpectedIssue) -> Self {
        let mut issues = self.issues.clone();
        issues.push(issue);
        Self {
            code_location: self.code_location.clone(),
            issues,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssertionData {
    HaveCode(HaveCodeData),
    SeeReturnType(SeeReturnTypeData),
    SeePsalmIssues(SeePsalmIssuesData),
}

impl AssertionData {
    #[must_use]
    pub const fn kind(&self) -> AssertionKind {
        match self {
            Self::HaveCode(_) => AssertionKind::HaveCode,
            Self::SeeReturnType(_) => AssertionKind::SeeReturnType,
            Self::SeePsalmIssues(_) => AssertionKind::SeePsalmIssues,
        }
    }
}

/// Typed access to bag entries.
pub trait AssertionPayload: Sized {
    const KIND: AssertionKind;

    fn from_data(data: &AssertionData) -> Option<&Self>;

    fn into_data(self) -> AssertionData;
}

macro_rules! assertion_payload {
    ($ty:ty, $variant:ident) => {
        impl AssertionPayload for $ty {
            const KIND: AssertionKind = AssertionKind::$variant;

            #[inline]
            fn from_data(data: &AssertionData) -> Option<&Self> {
                match data {
                    AssertionData::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            fn into_data(self) -> AssertionData {
                AssertionData::$variant(self)
            }
        }
    };
}

assertion_payload!(HaveCodeData, HaveCode);
assertion_payload!(SeeReturnTypeData, SeeReturnType);
assertion_payload!(SeePsalmIssuesData, SeePsalmIssues);

/// Assertion data gathered for one (test class, test method).
///
/// At most one entry per kind. `with` returns a new bag; a bag is never
/// mutated after it has been stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssertionBag {
    entries: FxHashMap<AssertionKind, AssertionData>,
}

impl AssertionBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this bag with the entry of `data`'s kind replaced.
    #[must_use]
    pub fn with(&self, data: impl AssertionPayload) -> Self {
        let data = data.into_data();
        let mut entries = self.entries.clone();
        entries.insert(data.kind(), data);
        Self { entries }
    }

    #[must_use]
    pub fn get<P: AssertionPayload>(&self) -> Option<&P> {
        self.entries.get(&P::KIND).and_then(P::from_data)
    }

    #[must_use]
    pub fn get_kind(&self, kind: AssertionKind) -> Option<&AssertionData> {
        self.entries.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: AssertionKind) -> bool {
        self.entries.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/assertion_bag_tests.rs"]
mod tests;
