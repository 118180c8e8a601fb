//! Well-known library shapes.
//!
//! Just enough of `System` and the standard collections for classification:
//! which types are value types, which implement `IEnumerable<T>`, and which
//! collections can be rebuilt from a sequence of their elements.

use crate::well_known::{COLLECTIONS_CONCURRENT, COLLECTIONS_GENERIC, ENUMERABLE, NULLABLE, SYSTEM};
use crate::{ConstructorDecl, Parameter, TypeDecl, TypeKind, TypeRef};

const VALUE_TYPES: &[&str] = &[
    "Boolean", "Byte", "SByte", "Char", "Int16", "UInt16", "Int32", "UInt32", "Int64", "UInt64",
    "Single", "Double", "Decimal", "DateTime", "DateTimeOffset", "TimeSpan", "Guid",
];

/// Collections constructible from `IEnumerable<T>`.
const COLLECTIONS: &[(&str, &str)] = &[
    (COLLECTIONS_GENERIC, "List"),
    (COLLECTIONS_GENERIC, "LinkedList"),
    (COLLECTIONS_GENERIC, "Queue"),
    (COLLECTIONS_GENERIC, "Stack"),
    (COLLECTIONS_GENERIC, "HashSet"),
    (COLLECTIONS_GENERIC, "SortedSet"),
    (COLLECTIONS_CONCURRENT, "ConcurrentQueue"),
    (COLLECTIONS_CONCURRENT, "ConcurrentStack"),
    (COLLECTIONS_CONCURRENT, "ConcurrentBag"),
];

fn enumerable_of(element: TypeRef) -> TypeRef {
    TypeRef::generic(COLLECTIONS_GENERIC, ENUMERABLE, vec![element])
}

pub(crate) fn declarations() -> Vec<TypeDecl> {
    let t = || TypeRef::param("T");
    let mut decls = vec![
        TypeDecl::class(SYSTEM, "Object"),
        TypeDecl::interface(SYSTEM, "ICloneable"),
        TypeDecl::class(SYSTEM, "String")
            .with_kind(TypeKind::SEALED)
            .with_interface(enumerable_of(TypeRef::named(SYSTEM, "Char")))
            .with_constructors(Vec::new()),
        TypeDecl::structure(SYSTEM, NULLABLE).with_generics(["T"]),
        TypeDecl::interface(COLLECTIONS_GENERIC, ENUMERABLE).with_generics(["T"]),
    ];

    decls.extend(
        VALUE_TYPES
            .iter()
            .map(|name| TypeDecl::structure(SYSTEM, *name)),
    );

    for name in ["IReadOnlyCollection", "ICollection"] {
        decls.push(
            TypeDecl::interface(COLLECTIONS_GENERIC, name)
                .with_generics(["T"])
                .with_interface(enumerable_of(t())),
        );
    }
    decls.push(
        TypeDecl::interface(COLLECTIONS_GENERIC, "IReadOnlyList")
            .with_generics(["T"])
            .with_interface(TypeRef::generic(
                COLLECTIONS_GENERIC,
                "IReadOnlyCollection",
                vec![t()],
            )),
    );
    decls.push(
        TypeDecl::interface(COLLECTIONS_GENERIC, "IList")
            .with_generics(["T"])
            .with_interface(TypeRef::generic(COLLECTIONS_GENERIC, "ICollection", vec![t()])),
    );

    for (namespace, name) in COLLECTIONS {
        let interface = if *name == "List" {
            TypeRef::generic(COLLECTIONS_GENERIC, "IList", vec![t()])
        } else {
            enumerable_of(t())
        };
        decls.push(
            TypeDecl::class(*namespace, *name)
                .with_generics(["T"])
                .with_interface(interface)
                .with_constructor(ConstructorDecl::new(vec![Parameter::new(
                    "collection",
                    enumerable_of(t()),
                )])),
        );
    }

    decls
}

#[cfg(test)]
mod tests;
