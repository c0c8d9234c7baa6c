use super::*;

fn undefined(mut union: Union) -> Union {
    union.possibly_undefined = true;
    union
}

#[test]
fn test_union_new_rejects_empty_input() {
    assert!(Union::new(Vec::<Atomic>::new()).is_none());
}

#[test]
fn test_union_new_keeps_duplicate_atomics_once() {
    let union = Union::new([Atomic::Int, Atomic::String, Atomic::Int]).unwrap();
    assert_eq!(union.atomics().len(), 2);
    assert!(!union.is_single());
}

#[test]
fn test_with_atomic_is_idempotent() {
    let union = Union::int();
    let nullable = union.with_atomic(Atomic::Null);
    assert_eq!(nullable.atomics().len(), 2);
    assert_eq!(nullable.with_atomic(Atomic::Null), nullable);
    // The source union is untouched.
    assert!(union.is_single());
}

#[test]
fn test_combine_merges_atomics_and_undefined_flag() {
    let a = Union::int();
    let b = undefined(Union::string());
    let combined = Union::combine([&a, &b]).unwrap();

    assert_eq!(combined.atomics().len(), 2);
    assert!(combined.possibly_undefined);
    assert!(Union::combine(std::iter::empty()).is_none());
}

#[test]
fn test_map_atomics_preserves_flag() {
    let union = undefined(Union::literal_int(3));
    let mapped = union.map_atomics(|_| Atomic::Int);
    assert_eq!(mapped.atomics(), &[Atomic::Int]);
    assert!(mapped.possibly_undefined);
}

#[test]
fn test_record_list_flag_is_derived_from_keys() {
    let list = Record::list([Union::int(), Union::string()]);
    assert!(list.is_list);
    assert!(list.sealed);

    let keyed = Record::new(
        [(RecordKey::from("a"), Union::int())].into_iter().collect(),
        true,
    );
    assert!(!keyed.is_list);

    let gap = Record::new(
        [(RecordKey::Int(0), Union::int()), (RecordKey::Int(2), Union::int())]
            .into_iter()
            .collect(),
        true,
    );
    assert!(!gap.is_list);
}

#[test]
fn test_possibly_undefined_slot_breaks_list() {
    let properties = [
        (RecordKey::Int(0), Union::int()),
        (RecordKey::Int(1), undefined(Union::int())),
    ]
    .into_iter()
    .collect();
    assert!(!Record::has_list_keys(&properties));
}

#[test]
fn test_record_generic_key_and_value_types() {
    let record = Record::new(
        [
            (RecordKey::from("a"), Union::int()),
            (RecordKey::from("b"), undefined(Union::string())),
        ]
        .into_iter()
        .collect(),
        true,
    );

    assert_eq!(record.generic_key_type().atomics().len(), 2);
    let value = record.generic_value_type();
    assert_eq!(value.atomics(), &[Atomic::Int, Atomic::String]);
    assert!(!value.possibly_undefined);
}

#[test]
fn test_empty_record_generic_types_are_never() {
    let record = Record::new(IndexMap::new(), true);
    assert_eq!(record.generic_key_type(), Union::never());
    assert_eq!(record.generic_value_type(), Union::never());
}

#[test]
fn test_generic_object_is_an_object() {
    let generic = Atomic::GenericObject(GenericObject::new("Box", [Union::int()]));
    assert_eq!(generic.as_object().map(|o| o.name.as_str()), Some("Box"));
    assert!(Atomic::Int.as_object().is_none());
}

#[test]
fn test_is_literal() {
    assert!(Atomic::LiteralInt(1).is_literal());
    assert!(Atomic::True.is_literal());
    assert!(!Atomic::Int.is_literal());
    assert!(!Atomic::Bool.is_literal());
}

#[test]
fn test_record_key_display() {
    assert_eq!(RecordKey::from("name").to_string(), "name");
    assert_eq!(RecordKey::from(3i64).to_string(), "3");
}
