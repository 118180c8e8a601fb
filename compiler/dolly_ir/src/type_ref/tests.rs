use super::*;
use pretty_assertions::assert_eq;

fn list_of(element: TypeRef) -> TypeRef {
    TypeRef::generic("System.Collections.Generic", "List", vec![element])
}

#[test]
fn display_shows_both_annotation_levels() {
    let ty = list_of(TypeRef::named("Dolly", "SimpleClass").nullable()).nullable();
    assert_eq!(ty.to_string(), "List<SimpleClass?>?");
}

#[test]
fn display_arrays_and_params() {
    assert_eq!(TypeRef::array(TypeRef::named("System", "Int32")).to_string(), "Int32[]");
    assert_eq!(TypeRef::param("T").nullable().to_string(), "T?");
}

#[test]
fn full_name_is_qualified() {
    let ty = list_of(TypeRef::named("Dolly", "SimpleClass"));
    assert_eq!(
        ty.full_name(),
        "System.Collections.Generic.List<Dolly.SimpleClass>"
    );
}

#[test]
fn without_annotation_only_strips_top_level() {
    let ty = list_of(TypeRef::named("", "string").nullable()).nullable();
    let stripped = ty.without_annotation();
    assert!(!stripped.is_annotated());
    assert!(stripped.type_args()[0].is_annotated());
}

#[test]
fn substitute_replaces_params_recursively() {
    let subst = Substitution::new(&["T".to_string()], &[TypeRef::named("Dolly", "Item")]);
    let ty = TypeRef::generic(
        "System.Collections.Generic",
        "IEnumerable",
        vec![TypeRef::param("T")],
    );
    assert_eq!(
        ty.substitute(&subst),
        TypeRef::generic(
            "System.Collections.Generic",
            "IEnumerable",
            vec![TypeRef::named("Dolly", "Item")]
        )
    );
}

#[test]
fn substitute_keeps_param_annotation() {
    let subst = Substitution::new(&["T".to_string()], &[TypeRef::named("System", "String")]);
    let ty = TypeRef::array(TypeRef::param("T").nullable());
    assert_eq!(
        ty.substitute(&subst),
        TypeRef::array(TypeRef::named("System", "String").nullable())
    );
}

#[test]
fn substitute_leaves_unbound_params() {
    let ty = TypeRef::param("U");
    assert_eq!(ty.substitute(&Substitution::default()), ty);
}

#[test]
fn same_type_ignores_annotations() {
    let a = list_of(TypeRef::named("System", "String").nullable());
    let b = list_of(TypeRef::named("System", "String")).nullable();
    assert!(a.same_type(&b));
    assert_ne!(a, b);
}

#[test]
fn same_type_distinguishes_arguments() {
    let a = list_of(TypeRef::named("System", "String"));
    let b = list_of(TypeRef::named("System", "Int32"));
    assert!(!a.same_type(&b));
    assert!(!a.same_type(&TypeRef::array(TypeRef::named("System", "String"))));
}

#[test]
fn is_named_checks_arity() {
    let ty = TypeRef::generic("System", "Nullable", vec![TypeRef::named("System", "Int32")]);
    assert!(ty.is_named("System", "Nullable", 1));
    assert!(!ty.is_named("System", "Nullable", 0));
    assert!(!TypeRef::param("T").is_named("System", "Nullable", 1));
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn deserializes_from_tagged_json() {
    let json = r#"{
        "kind": "named",
        "namespace": "System.Collections.Generic",
        "name": "List",
        "args": [{ "kind": "named", "namespace": "Dolly", "name": "SimpleClass", "nullable": true }],
        "nullable": true
    }"#;
    let ty: TypeRef = serde_json::from_str(json).unwrap();
    assert_eq!(
        ty,
        list_of(TypeRef::named("Dolly", "SimpleClass").nullable()).nullable()
    );
}
