use super::*;

fn location(start: u32) -> CodeLocation {
    CodeLocation::new("Test.php", start, start + 10)
}

fn have_code(ty: Union) -> HaveCodeData {
    HaveCodeData {
        code_location: location(0),
        actual_return_type: ty,
    }
}

#[test]
fn test_assertion_names_match_exactly() {
    assert_eq!(
        AssertionName::from_method_name("haveCode"),
        Some(AssertionName::HaveCode)
    );
    assert_eq!(
        AssertionName::from_method_name("seeReturnType"),
        Some(AssertionName::SeeReturnType)
    );
    assert_eq!(
        AssertionName::from_method_name("seePsalmIssue"),
        Some(AssertionName::SeePsalmIssue)
    );
    assert_eq!(AssertionName::from_method_name("havecode"), None);
    assert_eq!(AssertionName::from_method_name("seePsalmIssues"), None);
    assert_eq!(AssertionName::SeeReturnType.to_string(), "seeReturnType");
}

#[test]
fn test_with_returns_new_bag() {
    let empty = AssertionBag::new();
    let bag = empty.with(have_code(Union::int()));

    assert!(empty.is_empty());
    assert_eq!(bag.len(), 1);
    assert!(bag.contains(AssertionKind::HaveCode));
    assert!(!bag.contains(AssertionKind::SeeReturnType));
}

#[test]
fn test_with_replaces_entry_of_same_kind() {
    let bag = AssertionBag::new()
        .with(have_code(Union::int()))
        .with(have_code(Union::string()));

    assert_eq!(bag.len(), 1);
    assert_eq!(
        bag.get::<HaveCodeData>().map(|data| data.actual_return_type.id()),
        Some("string".to_string())
    );
}

#[test]
fn test_typed_get() {
    let bag = AssertionBag::new().with(SeeReturnTypeData {
        code_location: location(20),
        expected_return_type: Union::int(),
        invariant: false,
    });

    assert!(bag.get::<HaveCodeData>().is_none());
    let data = bag.get::<SeeReturnTypeData>().unwrap();
    assert!(!data.invariant);
    assert_eq!(
        bag.get_kind(AssertionKind::SeeReturnType).map(AssertionData::kind),
        Some(AssertionKind::SeeReturnType)
    );
}

#[test]
fn test_see_psalm_issues_concat_keeps_location() {
    let first = SeePsalmIssuesData::empty(location(30))
        .concat(ExpectedIssue::new("InvalidArgument", "first"));
    let second = first.concat(ExpectedIssue::new("InvalidReturnType", "second"));

    assert_eq!(first.issues.len(), 1);
    assert_eq!(second.issues.len(), 2);
    assert_eq!(second.code_location, location(30));
    assert_eq!(second.issues[1].kind, "InvalidReturnType");
}

#[test]
fn test_issue_key() {
    let issue = ExpectedIssue::new("InvalidArgument", "Expected int");
    assert_eq!(issue.key(), "[InvalidArgument]:[Expected int]");
    assert_eq!(issue.key(), issue_key("InvalidArgument", "Expected int"));
}
