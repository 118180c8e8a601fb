use super::*;
use crate::test_fixtures::{clonable, clone_ignore, int, simple_class, string, table, MODULE};
use crate::MemberFlags;
use dolly_ir::{ConstructorDecl, Parameter, QualifiedName, TypeDecl, TypeKind, TypeRef, TypeTable};
use pretty_assertions::assert_eq;

fn model_of(table: &TypeTable, namespace: &str, name: &str) -> Result<Model, ClassificationError> {
    let view = TypeDescriptor::of(table, &TypeRef::named(namespace, name))
        .unwrap_or_else(|| panic!("{namespace}.{name} is not declared"));
    build(&view, Nullability::Tracked, MODULE)
}

fn names(members: &[Member]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

fn plain(name: &str) -> Member {
    Member::new(name, false, MemberFlags::NONE)
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn simple_class_skips_ignored_member() {
    let model = model_of(&table(), "Dolly", "SimpleClass").unwrap();
    assert_eq!(
        model,
        Model::new("Dolly", "SimpleClass", MODULE, ModelFlags::NONE)
            .with_members(vec![plain("First"), plain("Second")])
    );
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn simple_struct_is_sealed() {
    let model = model_of(&table(), "Dolly", "SimpleStruct").unwrap();
    assert_eq!(
        model.flags,
        ModelFlags {
            structure: true,
            sealed: true,
            ..ModelFlags::NONE
        }
    );
    assert_eq!(names(&model.members), vec!["First", "Second"]);
    assert!(model.constructor_members.is_empty());
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn positional_record_uses_primary_constructor() {
    let mut host = table();
    let record = TypeRef::named("Dolly", "Person");
    host.insert(
        TypeDecl::class("Dolly", "Person")
            .with_kind(TypeKind::RECORD | TypeKind::SEALED)
            .with_attribute(clonable())
            .with_member(
                MemberDecl::property("EqualityContract", TypeRef::named("System", "Type"))
                    .readonly()
                    .implicit(),
            )
            .with_member(MemberDecl::property("Foo", string()))
            .with_constructors(vec![
                ConstructorDecl::new(vec![Parameter::new("original", record)]),
                ConstructorDecl::new(vec![Parameter::new("Foo", string())]),
            ]),
    );

    let model = model_of(&host, "Dolly", "Person").unwrap();
    assert_eq!(names(&model.constructor_members), vec!["Foo"]);
    assert!(model.members.is_empty());
    assert_eq!(
        model.flags,
        ModelFlags {
            record: true,
            sealed: true,
            ..ModelFlags::NONE
        }
    );
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn readonly_member_moves_to_constructor() {
    let mut host = table();
    host.insert(
        TypeDecl::class("Dolly", "ConstructorClass")
            .with_attribute(clonable())
            .with_member(MemberDecl::property("AnyOneCanSet", string()))
            .with_member(MemberDecl::property("OnlyCtorCanSet", string()).readonly())
            .with_constructors(vec![ConstructorDecl::new(vec![Parameter::new(
                "onlyCtorCanSet",
                string(),
            )])]),
    );

    let model = model_of(&host, "Dolly", "ConstructorClass").unwrap();
    assert_eq!(
        model.constructor_members,
        vec![Member::new("OnlyCtorCanSet", true, MemberFlags::NONE)]
    );
    assert_eq!(model.members, vec![plain("AnyOneCanSet")]);
}

#[test]
fn missing_constructor_reports_required_and_available() {
    let mut host = table();
    host.insert(
        TypeDecl::class("Dolly", "ConstructorClass")
            .with_member(MemberDecl::property("AnyOneCanSet", string()))
            .with_member(MemberDecl::field("onlyCtorCanSet", string()).readonly()),
    );

    assert_eq!(
        model_of(&host, "Dolly", "ConstructorClass"),
        Err(ClassificationError::NoValidConstructor {
            type_name: "Dolly.ConstructorClass".to_string(),
            required: vec!["onlyCtorCanSet".to_string()],
            members: vec!["AnyOneCanSet".to_string(), "onlyCtorCanSet".to_string()],
        })
    );
}

#[test]
fn abstract_type_is_rejected() {
    let mut host = table();
    host.insert(
        TypeDecl::class("Dolly", "Shape")
            .with_kind(TypeKind::ABSTRACT)
            .with_member(MemberDecl::property("X", int())),
    );
    assert_eq!(
        model_of(&host, "Dolly", "Shape"),
        Err(ClassificationError::AbstractType {
            type_name: "Dolly.Shape".to_string()
        })
    );
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn properties_of_whole_chain_precede_fields() {
    let mut host = table();
    host.insert(
        TypeDecl::class("Dolly", "Base")
            .with_member(MemberDecl::field("baseField", int()))
            .with_member(MemberDecl::property("P0", int())),
    );
    host.insert(
        TypeDecl::class("Dolly", "Derived")
            .with_base(TypeRef::named("Dolly", "Base"))
            .with_member(MemberDecl::field("ownField", int()))
            .with_member(MemberDecl::property("P1", int()))
            .with_member(MemberDecl::property("P2", int())),
    );

    let model = model_of(&host, "Dolly", "Derived").unwrap();
    assert_eq!(
        names(&model.members),
        vec!["P1", "P2", "P0", "ownField", "baseField"]
    );
    assert!(!model.flags.clonable_base);
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn static_const_implicit_and_ignored_members_are_skipped() {
    let mut host = table();
    host.insert(
        TypeDecl::class("Dolly", "Mixed")
            .with_member(MemberDecl::property("Instance", int()))
            .with_member(MemberDecl::property("Shared", int()).as_static())
            .with_member(MemberDecl::field("Limit", int()).constant())
            .with_member(MemberDecl::field("<Instance>k__BackingField", int()).implicit())
            .with_member(MemberDecl::field("cache", int()).with_attribute(clone_ignore()))
            .with_member(
                // Ignore markers from another module do not apply.
                MemberDecl::field("kept", int())
                    .with_attribute(QualifiedName::new("Other.Dolly", "CloneIgnoreAttribute")),
            ),
    );

    let model = model_of(&host, "Dolly", "Mixed").unwrap();
    assert_eq!(names(&model.members), vec!["Instance", "kept"]);
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn member_types_are_classified() {
    let mut host = table();
    host.insert(
        TypeDecl::class("Dolly", "Holder")
            .with_member(MemberDecl::property("Child", simple_class().nullable())),
    );
    let model = model_of(&host, "Dolly", "Holder").unwrap();
    assert_eq!(
        model.members[0].flags,
        MemberFlags {
            clonable: true,
            member_nullable: true,
            ..MemberFlags::NONE
        }
    );
}

fn flags_for(kind: TypeKind, clonable_base: bool) -> ModelFlags {
    let mut host = TypeTable::with_prelude();
    host.insert(
        TypeDecl::class("Dolly", "SimpleClass")
            .with_kind(kind)
            .with_attribute(clonable()),
    );
    let mut complex = TypeDecl::class("Dolly", "ComplexClass")
        .with_kind(kind)
        .with_attribute(clonable());
    if clonable_base {
        complex = complex.with_base(TypeRef::named("Dolly", "SimpleClass"));
    }
    host.insert(complex);
    match model_of(&host, "Dolly", "ComplexClass") {
        Ok(model) => model.flags,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn model_flags_mirror_type_kind() {
    let none = ModelFlags::NONE;
    let cases = [
        (TypeKind::empty(), false, none),
        (
            TypeKind::RECORD,
            false,
            ModelFlags {
                record: true,
                ..none
            },
        ),
        (
            TypeKind::RECORD | TypeKind::VALUE_TYPE,
            false,
            ModelFlags {
                record: true,
                structure: true,
                sealed: true,
                ..none
            },
        ),
        (
            TypeKind::RECORD,
            true,
            ModelFlags {
                record: true,
                clonable_base: true,
                ..none
            },
        ),
        (
            TypeKind::VALUE_TYPE,
            false,
            ModelFlags {
                structure: true,
                sealed: true,
                ..none
            },
        ),
        (
            TypeKind::empty(),
            true,
            ModelFlags {
                clonable_base: true,
                ..none
            },
        ),
    ];
    for (kind, clonable_base, expected) in cases {
        assert_eq!(
            flags_for(kind, clonable_base),
            expected,
            "{kind:?} clonable_base={clonable_base}"
        );
    }
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn base_implementing_clone_interface_counts_as_clonable() {
    let mut host = table();
    host.insert(TypeDecl::class("Lib", "Entity").with_interface(TypeRef::generic(
        "Lib.Dolly",
        "IClonable",
        vec![TypeRef::named("Lib", "Entity")],
    )));
    host.insert(
        TypeDecl::class("Dolly", "Order")
            .with_base(TypeRef::named("Lib", "Entity"))
            .with_attribute(clonable()),
    );
    let model = model_of(&host, "Dolly", "Order").unwrap();
    assert!(model.flags.clonable_base);
}
