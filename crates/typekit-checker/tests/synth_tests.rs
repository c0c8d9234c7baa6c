use super::*;
use crate::call_args::CallArg;
use crate::host::NodeId;
use crate::syntax::Arg;
use crate::test_support::Fixture;
use typekit_common::CodeLocation;
use typekit_solver::{
    Atomic, NamedObject, Record, RecordKey, as_always_defined, as_possibly_undefined,
    as_single_atomic_of, is_type_equals_to_type, unwrap_generic,
};

const WRAPPER: &str = typekit_common::config::DEFAULT_STATIC_TYPE_INTERFACE;

fn arg(ty: Union) -> CallArg {
    CallArg {
        node: NodeId::new(0),
        location: CodeLocation::new("Test.php", 0, 0),
        ty,
    }
}

fn w(ty: Union) -> Union {
    Union::generic_object(WRAPPER, [ty])
}

/// The record inside a synthesized `Wrapper<array{...}>`.
fn unwrap_record(union: &Union) -> Record {
    let inner = unwrap_generic(union, WRAPPER).unwrap();
    as_single_atomic_of::<Record>(inner).unwrap().clone()
}

#[test]
fn test_shape_round_trip() {
    for ty in [
        Union::int(),
        Union::literal_string("a"),
        Union::named_object("App\\Foo"),
        Union::generic_object("Box", [Union::float()]),
    ] {
        let input = Union::record([("a", w(ty.clone()))], true);
        let synthesized = shape(&[arg(input)], WRAPPER).unwrap();
        let record = unwrap_record(&synthesized);

        let a = record.properties.get(&RecordKey::from("a")).unwrap();
        assert!(is_type_equals_to_type(a, &ty));
    }
}

#[test]
fn test_shape_with_optional_property() {
    let input = Union::record(
        [
            ("x", w(Union::int())),
            ("y", w(as_possibly_undefined(&Union::string()))),
        ],
        true,
    );
    let record = unwrap_record(&shape(&[arg(input)], WRAPPER).unwrap());

    assert!(!record.is_list);
    assert!(record.sealed);
    assert!(!record.properties[&RecordKey::from("x")].possibly_undefined);
    assert!(record.properties[&RecordKey::from("y")].possibly_undefined);
}

#[test]
fn test_shape_optional_element_breaks_list() {
    let input = Union::list_record([w(Union::int()), w(as_possibly_undefined(&Union::int()))]);
    let record = unwrap_record(&shape(&[arg(input)], WRAPPER).unwrap());
    assert!(!record.is_list);

    let input = Union::list_record([w(Union::int()), w(Union::string())]);
    let record = unwrap_record(&shape(&[arg(input)], WRAPPER).unwrap());
    assert!(record.is_list);
}

#[test]
fn test_shape_keeps_unsealed_input() {
    let input = Union::record([("a", w(Union::int()))], false);
    let record = unwrap_record(&shape(&[arg(input)], WRAPPER).unwrap());
    assert!(!record.sealed);
}

#[test]
fn test_shape_rejects_bad_input() {
    // Property not wrapped.
    let input = Union::record([("a", Union::int())], true);
    assert!(shape(&[arg(input)], WRAPPER).is_none());

    // Wrapped by another class.
    let input = Union::record([("a", Union::generic_object("Other", [Union::int()]))], true);
    assert!(shape(&[arg(input)], WRAPPER).is_none());

    // Not a record.
    assert!(shape(&[arg(Union::int())], WRAPPER).is_none());
    assert!(shape(&[], WRAPPER).is_none());
}

#[test]
fn test_intersection() {
    let input = Union::list_record([
        w(Union::named_object("A")),
        w(Union::generic_object("B", [Union::int()])),
        w(Union::named_object("C")),
    ]);
    let synthesized = intersection(&[arg(input)], WRAPPER).unwrap();
    let inner = unwrap_generic(&synthesized, WRAPPER).unwrap();

    assert_eq!(inner.id(), "A&B<int>&C");
    let carrier = as_single_atomic_of::<NamedObject>(inner).unwrap();
    assert_eq!(carrier.name, "A");
    assert_eq!(carrier.intersections.len(), 2);
}

#[test]
fn test_intersection_generic_carrier_keeps_params() {
    let input = Union::list_record([
        w(Union::generic_object("A", [Union::int()])),
        w(Union::named_object("B")),
    ]);
    let synthesized = intersection(&[arg(input)], WRAPPER).unwrap();
    assert_eq!(unwrap_generic(&synthesized, WRAPPER).unwrap().id(), "A<int>&B");
}

#[test]
fn test_intersection_rejects_bad_input() {
    // Empty list.
    let input = Union::list_record([]);
    assert!(intersection(&[arg(input)], WRAPPER).is_none());

    // Keyed record.
    let input = Union::record([("a", w(Union::named_object("A")))], true);
    assert!(intersection(&[arg(input)], WRAPPER).is_none());

    // Non-object element.
    let input = Union::list_record([w(Union::named_object("A")), w(Union::int())]);
    assert!(intersection(&[arg(input)], WRAPPER).is_none());
}

#[test]
fn test_optional_marks_possibly_undefined() {
    let synthesized = optional(Some(&[Union::int()]), WRAPPER).unwrap();
    let inner = unwrap_generic(&synthesized, WRAPPER).unwrap();
    assert!(inner.possibly_undefined);
    assert!(is_type_equals_to_type(inner, &Union::int()));

    assert!(optional(None, WRAPPER).is_none());
    assert!(optional(Some(&[]), WRAPPER).is_none());
}

#[test]
fn test_optional_is_idempotent() {
    let once = optional(Some(&[Union::string()]), WRAPPER).unwrap();
    let inner_once = unwrap_generic(&once, WRAPPER).unwrap().clone();

    let twice = optional(Some(std::slice::from_ref(&inner_once)), WRAPPER).unwrap();
    let inner_twice = unwrap_generic(&twice, WRAPPER).unwrap();

    assert!(inner_twice.possibly_undefined);
    assert!(is_type_equals_to_type(inner_twice, &Union::string()));
    assert_eq!(as_always_defined(inner_twice), Union::string());
}

#[test]
fn test_generic() {
    let class = Union::literal_class_string("App\\Option");
    let params = Union::list_record([w(Union::int()), w(Union::string())]);
    let synthesized = generic(&[arg(class), arg(params)], WRAPPER).unwrap();

    assert_eq!(
        unwrap_generic(&synthesized, WRAPPER).unwrap().id(),
        "App\\Option<int, string>"
    );
}

#[test]
fn test_generic_rejects_bad_input() {
    let params = Union::list_record([w(Union::int())]);

    // Not a class literal.
    assert!(generic(&[arg(Union::string()), arg(params.clone())], WRAPPER).is_none());
    // Missing parameter list.
    assert!(generic(&[arg(Union::literal_class_string("A"))], WRAPPER).is_none());
    // Empty parameter list.
    let empty = Union::list_record([]);
    assert!(generic(&[arg(Union::literal_class_string("A")), arg(empty)], WRAPPER).is_none());
    // Unwrapped parameter.
    let raw = Union::list_record([Union::int()]);
    assert!(generic(&[arg(Union::literal_class_string("A")), arg(raw)], WRAPPER).is_none());
}

#[test]
fn test_dispatch_by_class_and_method() {
    let mut fixture = Fixture::new();
    let providers = ReturnTypeProviders::new(&fixture.config);
    let input = fixture.value(Union::record([("a", w(Union::int()))], true));
    let call_args = [Arg::new(input)];

    let static_types = fixture.config.static_types_class.to_ascii_lowercase();
    let event = MethodReturnTypeEvent {
        source: &fixture.host,
        fq_class_name: &static_types,
        method_name_lowercase: "shape",
        call_args: &call_args,
        template_type_parameters: None,
    };
    let synthesized = providers.get_method_return_type(&event).unwrap();
    assert_eq!(unwrap_record(&synthesized).properties.len(), 1);

    // `optional` is registered on the wrapper, not on the static-types class.
    let template = [Union::int()];
    let event = MethodReturnTypeEvent {
        method_name_lowercase: "optional",
        template_type_parameters: Some(&template),
        ..event
    };
    assert!(providers.get_method_return_type(&event).is_none());

    let event = MethodReturnTypeEvent {
        fq_class_name: WRAPPER,
        ..event
    };
    assert!(providers.get_method_return_type(&event).is_some());
}

#[test]
fn test_dispatch_ignores_method_name_case() {
    let mut fixture = Fixture::new();
    let providers = ReturnTypeProviders::new(&fixture.config);
    let input = fixture.value(Union::record([("a", w(Union::int()))], true));
    let call_args = [Arg::new(input)];

    let event = MethodReturnTypeEvent {
        source: &fixture.host,
        fq_class_name: &fixture.config.static_types_class,
        method_name_lowercase: "Shape",
        call_args: &call_args,
        template_type_parameters: None,
    };
    assert!(providers.get_method_return_type(&event).is_some());

    let template = [Union::int()];
    let event = MethodReturnTypeEvent {
        fq_class_name: WRAPPER,
        method_name_lowercase: "OPTIONAL",
        template_type_parameters: Some(&template),
        ..event
    };
    assert!(providers.get_method_return_type(&event).is_some());
}

#[test]
fn test_dispatch_requires_resolved_arguments() {
    let mut fixture = Fixture::new();
    let providers = ReturnTypeProviders::new(&fixture.config);
    let unresolved = fixture.expr(crate::syntax::ExprKind::Other, None, 0, 0);
    let call_args = [Arg::new(unresolved)];

    let event = MethodReturnTypeEvent {
        source: &fixture.host,
        fq_class_name: &fixture.config.static_types_class,
        method_name_lowercase: "shape",
        call_args: &call_args,
        template_type_parameters: None,
    };
    assert!(providers.get_method_return_type(&event).is_none());
}

#[test]
fn test_class_like_names() {
    let config = typekit_common::ToolkitConfig::default();
    let providers = ReturnTypeProviders::new(&config);
    assert_eq!(
        providers.class_like_names(),
        vec![
            config.static_types_class.as_str(),
            config.static_type_interface.as_str()
        ]
    );
}

#[test]
fn test_synthesized_atomic_is_wrapper_generic() {
    let synthesized = optional(Some(&[Union::int()]), WRAPPER).unwrap();
    assert!(matches!(
        synthesized.atomics(),
        [Atomic::GenericObject(generic)] if generic.name() == WRAPPER
    ));
}
