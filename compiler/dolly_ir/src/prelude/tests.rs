use super::*;
use crate::{QualifiedName, TypeDescriptor, TypeHost, TypeTable};

#[test]
fn names_are_unique() {
    let decls = declarations();
    let table: TypeTable = decls.clone().into_iter().collect();
    assert_eq!(table.len(), decls.len());
}

#[test]
fn primitives_and_nullable_are_value_types() {
    let table = TypeTable::with_prelude();
    for name in ["Int32", "Boolean", "Guid", "Nullable"] {
        let decl = table.lookup(&QualifiedName::new("System", name));
        assert!(
            decl.is_some_and(|d| d.kind.contains(TypeKind::VALUE_TYPE)),
            "{name} should be a value type"
        );
    }
    assert!(table
        .lookup(&QualifiedName::new("System", "String"))
        .is_some_and(|d| !d.kind.contains(TypeKind::VALUE_TYPE)));
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn every_collection_rebuilds_from_its_sequence() {
    let table = TypeTable::with_prelude();
    for (namespace, name) in COLLECTIONS {
        let ty = TypeRef::generic(*namespace, *name, vec![TypeRef::named(SYSTEM, "Int32")]);
        let view = TypeDescriptor::of(&table, &ty).unwrap();
        let element = view.sequence_element();
        assert_eq!(element, Some(TypeRef::named(SYSTEM, "Int32")), "{name}");
        assert!(
            view.constructors()
                .iter()
                .any(|c| c.arity() == 1 && c.params[0].ty.is_named(COLLECTIONS_GENERIC, ENUMERABLE, 1)),
            "{name} should accept a sequence"
        );
    }
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn string_is_a_sequence_of_char_without_sequence_constructor() {
    let table = TypeTable::with_prelude();
    let string = TypeDescriptor::of(&table, &TypeRef::named(SYSTEM, "String")).unwrap();
    assert_eq!(string.sequence_element(), Some(TypeRef::named(SYSTEM, "Char")));
    assert!(string.constructors().is_empty());
}
