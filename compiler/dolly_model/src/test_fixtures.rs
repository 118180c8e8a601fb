//! Shared declarations for unit tests.

use dolly_ir::well_known::{CLONABLE_ATTRIBUTE, CLONE_IGNORE_ATTRIBUTE};
use dolly_ir::{MemberDecl, QualifiedName, TypeDecl, TypeRef, TypeTable};

pub(crate) const MODULE: &str = "Dolly.Tests";

pub(crate) fn clonable() -> QualifiedName {
    QualifiedName::new("Dolly.Tests.Dolly", CLONABLE_ATTRIBUTE)
}

pub(crate) fn clone_ignore() -> QualifiedName {
    QualifiedName::new("Dolly.Tests.Dolly", CLONE_IGNORE_ATTRIBUTE)
}

pub(crate) fn string() -> TypeRef {
    TypeRef::named("System", "String")
}

pub(crate) fn int() -> TypeRef {
    TypeRef::named("System", "Int32")
}

pub(crate) fn nullable_value(inner: TypeRef) -> TypeRef {
    TypeRef::generic("System", "Nullable", vec![inner])
}

pub(crate) fn list(element: TypeRef) -> TypeRef {
    TypeRef::generic("System.Collections.Generic", "List", vec![element])
}

pub(crate) fn enumerable(element: TypeRef) -> TypeRef {
    TypeRef::generic("System.Collections.Generic", "IEnumerable", vec![element])
}

pub(crate) fn simple_class() -> TypeRef {
    TypeRef::named("Dolly", "SimpleClass")
}

pub(crate) fn simple_struct() -> TypeRef {
    TypeRef::named("Dolly", "SimpleStruct")
}

fn simple_members(decl: TypeDecl) -> TypeDecl {
    decl.with_attribute(clonable())
        .with_member(MemberDecl::property("First", string()))
        .with_member(MemberDecl::property("Second", int()))
        .with_member(
            MemberDecl::property("DontClone", TypeRef::named("System", "Single"))
                .with_attribute(clone_ignore()),
        )
}

/// The prelude plus `[Clonable] class SimpleClass` and
/// `[Clonable] struct SimpleStruct`, each with `First`, `Second` and an
/// ignored `DontClone`.
pub(crate) fn table() -> TypeTable {
    let mut table = TypeTable::with_prelude();
    table.insert(simple_members(TypeDecl::class("Dolly", "SimpleClass")));
    table.insert(simple_members(TypeDecl::structure("Dolly", "SimpleStruct")));
    table
}
