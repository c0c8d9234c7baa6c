//! A self-contained host.
//!
//! Holds node types and locations in tables, a class hierarchy, and an issue
//! list. Containment is decided by [`StructuralSubtypeChecker`] over the
//! class table. Used by tests and by embedders that drive the hooks from
//! their own front end.

use crate::host::{Codebase, IssueBuffer, NodeId, TypeProvider};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::trace;
use typekit_common::{CodeLocation, Diagnostic};
use typekit_solver::{ClassHierarchy, StructuralSubtypeChecker, SubtypeOracle, Union};

/// Classes and their direct parents (extended classes and implemented
/// interfaces). Names compare case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    parents: FxHashMap<String, Vec<String>>,
}

impl ClassTable {
    pub fn add_class(&mut self, name: &str, parents: &[&str]) {
        self.parents.insert(
            name.to_ascii_lowercase(),
            parents.iter().map(|parent| parent.to_ascii_lowercase()).collect(),
        );
    }

    /// Whether `child` reaches `ancestor` through one or more parent links.
    #[must_use]
    pub fn extends(&self, child: &str, ancestor: &str) -> bool {
        let ancestor = ancestor.to_ascii_lowercase();
        let mut stack: Vec<&str> = self
            .parents
            .get(&child.to_ascii_lowercase())
            .map(|parents| parents.iter().map(String::as_str).collect())
            .unwrap_or_default();
        let mut visited: Vec<&str> = Vec::new();

        while let Some(class) = stack.pop() {
            if class == ancestor {
                return true;
            }
            if visited.contains(&class) {
                continue;
            }
            visited.push(class);
            if let Some(parents) = self.parents.get(class) {
                stack.extend(parents.iter().map(String::as_str));
            }
        }
        false
    }
}

impl ClassHierarchy for ClassTable {
    fn is_same_or_subclass(&self, child: &str, parent: &str) -> bool {
        child.eq_ignore_ascii_case(parent) || self.extends(child, parent)
    }
}

#[derive(Clone, Debug)]
pub struct InMemoryHost {
    file: Arc<str>,
    types: FxHashMap<NodeId, Union>,
    locations: FxHashMap<NodeId, CodeLocation>,
    classes: ClassTable,
    issues: Vec<Diagnostic>,
}

impl InMemoryHost {
    /// A host whose nodes live in `file` unless given another location.
    #[must_use]
    pub fn new(file: impl Into<Arc<str>>) -> Self {
        Self {
            file: file.into(),
            types: FxHashMap::default(),
            locations: FxHashMap::default(),
            classes: ClassTable::default(),
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn set_type(&mut self, node: NodeId, ty: Union) {
        self.types.insert(node, ty);
    }

    /// Place `node` at `start..end` of the host's file.
    pub fn set_span(&mut self, node: NodeId, start: u32, end: u32) {
        let location = CodeLocation::new(Arc::clone(&self.file), start, end);
        self.locations.insert(node, location);
    }

    pub fn set_location(&mut self, node: NodeId, location: CodeLocation) {
        self.locations.insert(node, location);
    }

    pub fn add_class(&mut self, name: &str, parents: &[&str]) {
        self.classes.add_class(name, parents);
    }

    #[must_use]
    pub const fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// All recorded issues, in recording order.
    #[must_use]
    pub fn issues(&self) -> &[Diagnostic] {
        &self.issues
    }

    /// Recorded issues of one kind.
    pub fn issues_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }
}

impl TypeProvider for InMemoryHost {
    fn type_of(&self, node: NodeId) -> Option<Union> {
        self.types.get(&node).cloned()
    }

    /// Nodes without a recorded location sit at the start of the host's file.
    fn location_of(&self, node: NodeId) -> CodeLocation {
        self.locations
            .get(&node)
            .cloned()
            .unwrap_or_else(|| CodeLocation::new(Arc::clone(&self.file), 0, 0))
    }
}

impl Codebase for InMemoryHost {
    fn class_extends(&self, child: &str, parent: &str) -> bool {
        self.classes.extends(child, parent)
    }

    fn is_type_contained_by_type(&self, input: &Union, container: &Union) -> bool {
        StructuralSubtypeChecker::new(&self.classes).is_contained_by(input, container)
    }
}

impl IssueBuffer for InMemoryHost {
    fn report(&mut self, issue: Diagnostic) {
        trace!(kind = issue.kind.as_str(), location = %issue.location, "issue reported");
        self.issues.push(issue);
    }

    fn issues_for(&self, file: &str) -> Vec<Diagnostic> {
        self.issues
            .iter()
            .filter(|issue| &*issue.location.file == file)
            .cloned()
            .collect()
    }

    fn remove(&mut self, file: &str, kind: &str, from: u32) {
        self.issues.retain(|issue| {
            !(&*issue.location.file == file && issue.kind == kind && issue.from() == from)
        });
    }
}

#[cfg(test)]
#[path = "../tests/in_memory_tests.rs"]
mod tests;
