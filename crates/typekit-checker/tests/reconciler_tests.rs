use super::*;
use crate::assertions::{ExpectedIssue, HaveCodeData, SeePsalmIssuesData, SeeReturnTypeData};
use crate::host::IssueBuffer;
use crate::in_memory::InMemoryHost;
use typekit_common::{CodeLocation, diagnostic_codes};
use typekit_solver::{Atomic, NamedObject, Union};

const FILE: &str = "Test.php";

fn at(start: u32, end: u32) -> CodeLocation {
    CodeLocation::new(FILE, start, end)
}

fn have_code(actual: Union) -> HaveCodeData {
    HaveCodeData {
        code_location: at(100, 200),
        actual_return_type: actual,
    }
}

fn see_return_type(expected: Union, invariant: bool) -> SeeReturnTypeData {
    SeeReturnTypeData {
        code_location: at(210, 240),
        expected_return_type: expected,
        invariant,
    }
}

fn see_issues(issues: &[(&str, &str)]) -> SeePsalmIssuesData {
    issues.iter().fold(
        SeePsalmIssuesData::empty(at(250, 280)),
        |data, (kind, message)| data.concat(ExpectedIssue::new(*kind, *message)),
    )
}

fn return_type_verdict(actual: Union, expected: Union, invariant: bool) -> Option<Diagnostic> {
    let mut host = InMemoryHost::new(FILE);
    host.add_class("Child", &["Parent"]);
    let bag = AssertionBag::new()
        .with(have_code(actual))
        .with(see_return_type(expected, invariant));
    SeeReturnTypeReconciler.reconcile(&bag, &mut host)
}

#[test]
fn test_invariant_equality() {
    assert!(return_type_verdict(Union::int(), Union::int(), true).is_none());

    let int_or_string = Union::new([Atomic::String, Atomic::Int]).unwrap();
    let string_or_int = Union::new([Atomic::Int, Atomic::String]).unwrap();
    assert!(return_type_verdict(int_or_string, string_or_int, true).is_none());

    // A subtype is not enough when invariant.
    assert!(return_type_verdict(Union::literal_int(1), Union::int(), true).is_some());
}

#[test]
fn test_containment() {
    assert!(return_type_verdict(Union::literal_int(1), Union::int(), false).is_none());
    assert!(
        return_type_verdict(
            Union::named_object("Child"),
            Union::named_object("Parent"),
            false
        )
        .is_none()
    );
    assert!(return_type_verdict(Union::int(), Union::string(), false).is_some());
    assert!(
        return_type_verdict(
            Union::named_object("Parent"),
            Union::named_object("Child"),
            false
        )
        .is_some()
    );
}

#[test]
fn test_return_type_failure_message() {
    let diagnostic = return_type_verdict(Union::int(), Union::string(), true).unwrap();

    assert_eq!(diagnostic.kind, "SeeReturnTypeAssertionFailed");
    assert_eq!(diagnostic.code, diagnostic_codes::SEE_RETURN_TYPE_ASSERTION_FAILED);
    assert_eq!(
        diagnostic.message_text,
        "Actual return type: int, Expected return type: string"
    );
    assert_eq!(diagnostic.location, at(210, 240));
}

#[test]
fn test_return_type_failure_keeps_identities_verbatim() {
    let diagnostic =
        return_type_verdict(Union::literal_string("{1}"), Union::string(), true).unwrap();
    assert_eq!(
        diagnostic.message_text,
        "Actual return type: '{1}', Expected return type: string"
    );
}

#[test]
fn test_return_type_needs_both_entries() {
    let mut host = InMemoryHost::new(FILE);
    let only_expected = AssertionBag::new().with(see_return_type(Union::string(), true));
    let only_actual = AssertionBag::new().with(have_code(Union::int()));

    assert!(SeeReturnTypeReconciler.reconcile(&only_expected, &mut host).is_none());
    assert!(SeeReturnTypeReconciler.reconcile(&only_actual, &mut host).is_none());
}

#[test]
fn test_matched_issue_is_suppressed() {
    let mut host = InMemoryHost::new(FILE);
    host.report(Diagnostic::error("K", "M", at(120, 130)));
    let bag = AssertionBag::new()
        .with(have_code(Union::void()))
        .with(see_issues(&[("K", "M")]));

    assert!(SeePsalmIssuesReconciler.reconcile(&bag, &mut host).is_none());
    assert!(host.issues().is_empty());
}

#[test]
fn test_unmatched_issue_is_reported() {
    let mut host = InMemoryHost::new(FILE);
    host.report(Diagnostic::error("K", "M2", at(120, 130)));
    let bag = AssertionBag::new()
        .with(have_code(Union::void()))
        .with(see_issues(&[("K", "M")]));

    let diagnostic = SeePsalmIssuesReconciler.reconcile(&bag, &mut host).unwrap();
    assert_eq!(diagnostic.kind, "SeePsalmIssueAssertionFailed");
    assert_eq!(
        diagnostic.message_text,
        "Expected issues were not raised:\n[K]: M"
    );
    assert_eq!(diagnostic.location, at(250, 280));

    // The unrelated recorded issue is untouched.
    assert_eq!(host.issues().len(), 1);
    assert_eq!(host.issues()[0].message_text, "M2");
}

#[test]
fn test_issue_outside_block_is_not_handled() {
    let mut host = InMemoryHost::new(FILE);
    host.report(Diagnostic::error("K", "M", at(190, 210)));
    let bag = AssertionBag::new()
        .with(have_code(Union::void()))
        .with(see_issues(&[("K", "M")]));

    assert!(SeePsalmIssuesReconciler.reconcile(&bag, &mut host).is_some());
    assert_eq!(host.issues().len(), 1);
}

#[test]
fn test_issue_in_other_file_is_not_handled() {
    let mut host = InMemoryHost::new(FILE);
    host.report(Diagnostic::error(
        "K",
        "M",
        CodeLocation::new("Other.php", 120, 130),
    ));
    let bag = AssertionBag::new()
        .with(have_code(Union::void()))
        .with(see_issues(&[("K", "M")]));

    assert!(SeePsalmIssuesReconciler.reconcile(&bag, &mut host).is_some());
}

#[test]
fn test_unmatched_issues_are_listed_once_per_key() {
    let mut host = InMemoryHost::new(FILE);
    host.report(Diagnostic::error("A", "handled", at(110, 115)));
    let bag = AssertionBag::new()
        .with(have_code(Union::void()))
        .with(see_issues(&[
            ("A", "handled"),
            ("B", "missing"),
            ("B", "missing"),
            ("C", "also missing"),
        ]));

    let diagnostic = SeePsalmIssuesReconciler.reconcile(&bag, &mut host).unwrap();
    assert_eq!(
        diagnostic.message_text,
        "Expected issues were not raised:\n[B]: missing\n[C]: also missing"
    );
    assert!(host.issues().is_empty());
}

#[test]
fn test_every_matching_recorded_issue_is_removed() {
    let mut host = InMemoryHost::new(FILE);
    host.report(Diagnostic::error("K", "M", at(110, 115)));
    host.report(Diagnostic::error("K", "M", at(150, 155)));
    let bag = AssertionBag::new()
        .with(have_code(Union::void()))
        .with(see_issues(&[("K", "M")]));

    assert!(SeePsalmIssuesReconciler.reconcile(&bag, &mut host).is_none());
    assert!(host.issues_for(FILE).is_empty());
}

#[test]
fn test_psalm_issues_need_have_code() {
    let mut host = InMemoryHost::new(FILE);
    let bag = AssertionBag::new().with(see_issues(&[("K", "M")]));
    assert!(SeePsalmIssuesReconciler.reconcile(&bag, &mut host).is_none());
}

#[test]
fn test_intersection_containment_through_host() {
    let mut object = NamedObject::new("A");
    object.intersections.push(Atomic::NamedObject(NamedObject::new("B")));
    let a_and_b = Union::single(Atomic::NamedObject(object));

    assert!(return_type_verdict(a_and_b.clone(), Union::named_object("B"), false).is_none());
    assert!(return_type_verdict(Union::named_object("A"), a_and_b, false).is_some());
}
