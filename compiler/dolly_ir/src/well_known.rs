//! Names the generator recognizes by convention.
//!
//! The clonability marker types are generated per module under
//! `<module>.Dolly`, so recognition is always by namespace and name.

/// Namespace of `Nullable<T>`, `Object`, `ICloneable` and the primitives.
pub const SYSTEM: &str = "System";

/// Namespace of the generic sequence interface and the standard collections.
pub const COLLECTIONS_GENERIC: &str = "System.Collections.Generic";

/// Namespace of the concurrent collections.
pub const COLLECTIONS_CONCURRENT: &str = "System.Collections.Concurrent";

/// The nullable value-type wrapper.
pub const NULLABLE: &str = "Nullable";

/// The generic sequence interface.
pub const ENUMERABLE: &str = "IEnumerable";

/// Class/struct annotation requesting clone generation.
pub const CLONABLE_ATTRIBUTE: &str = "ClonableAttribute";

/// Field/property annotation excluding a member from cloning.
pub const CLONE_IGNORE_ATTRIBUTE: &str = "CloneIgnoreAttribute";

/// The clone capability marker interface.
pub const CLONABLE_INTERFACE: &str = "IClonable";

/// Namespace holding the generated marker types for `module`.
pub fn support_namespace(module: &str) -> String {
    format!("{module}.Dolly")
}

/// Whether an attribute name as written in source refers to the clonability
/// attribute (`[Clonable]` or `[ClonableAttribute]`).
pub fn is_clonable_attribute_spelling(written: &str) -> bool {
    written == "Clonable" || written == CLONABLE_ATTRIBUTE
}
