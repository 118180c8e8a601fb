//! Member classification.
//!
//! A member's declared type is first stripped of member-level nullability,
//! then matched against a fixed priority of shapes. Elements of sequences go
//! through the same nullability step to produce the element-level flags.

use dolly_ir::well_known::{COLLECTIONS_GENERIC, ENUMERABLE, NULLABLE, SYSTEM};
use dolly_ir::{TypeDescriptor, TypeHost, TypeKind, TypeRef};

use crate::MemberFlags;

/// Whether the host tracks reference nullability annotations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Nullability {
    /// Annotations are meaningful: only `T?` reference types may be null,
    /// and `Nullable<T>` value types are unwrapped.
    #[default]
    Tracked,
    /// Annotations are absent: every reference type may be null.
    Oblivious,
}

impl From<bool> for Nullability {
    fn from(enabled: bool) -> Self {
        if enabled {
            Nullability::Tracked
        } else {
            Nullability::Oblivious
        }
    }
}

/// How a (nullability-stripped) type is copied, in matching priority.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeShape {
    /// `E[]`.
    Array { element: TypeRef },
    /// `IEnumerable<E>` itself.
    Sequence { element: TypeRef },
    /// A collection over `E` with a constructor taking a sequence of `E`.
    Reconstructible { element: TypeRef },
    /// Has clone methods of its own.
    Clonable,
    /// Copied by assignment.
    Plain,
}

impl TypeShape {
    /// Determine the shape of `ty`.
    pub fn of(host: &dyn TypeHost, ty: &TypeRef, module: &str) -> TypeShape {
        if let TypeRef::Array { element, .. } = ty {
            return TypeShape::Array {
                element: (**element).clone(),
            };
        }
        if ty.is_named(COLLECTIONS_GENERIC, ENUMERABLE, 1) {
            if let Some(element) = ty.type_args().first() {
                return TypeShape::Sequence {
                    element: element.clone(),
                };
            }
        }
        let Some(view) = TypeDescriptor::of(host, ty) else {
            return TypeShape::Plain;
        };
        if let Some(element) = reconstructible_element(host, &view) {
            return TypeShape::Reconstructible { element };
        }
        if view.is_clonable(module) {
            TypeShape::Clonable
        } else {
            TypeShape::Plain
        }
    }
}

/// The element type of a collection that can be rebuilt from a sequence of
/// its own elements.
///
/// The collection must implement `IEnumerable<E>` for exactly one `E`, and
/// declare a one-parameter constructor whose parameter is (or implements)
/// `IEnumerable<E>` for that same `E`. Nullability annotations are ignored
/// when comparing element types.
fn reconstructible_element(
    host: &dyn TypeHost,
    view: &TypeDescriptor<'_>,
) -> Option<TypeRef> {
    let element = view.sequence_element()?;
    let accepts_sequence = view.constructors().iter().any(|ctor| {
        let [param] = ctor.params.as_slice() else {
            return false;
        };
        TypeDescriptor::of(host, &param.ty)
            .and_then(|p| p.sequence_element())
            .is_some_and(|accepted| accepted.same_type(&element))
    });
    accepts_sequence.then_some(element)
}

/// Strip one level of nullability from `ty`.
///
/// Returns the type to continue classifying with, and whether the stripped
/// level may be null.
fn strip_nullable(
    host: &dyn TypeHost,
    ty: &TypeRef,
    nullability: Nullability,
) -> (TypeRef, bool) {
    match nullability {
        Nullability::Tracked => {
            if let Some(inner) = nullable_value_inner(host, ty) {
                return (inner.clone(), true);
            }
            let nullable = ty.is_annotated() && host.is_reference_type(ty);
            (ty.clone(), nullable)
        }
        Nullability::Oblivious => (ty.clone(), host.is_reference_type(ty)),
    }
}

/// The `T` of `System.Nullable<T>`.
fn nullable_value_inner<'t>(host: &dyn TypeHost, ty: &'t TypeRef) -> Option<&'t TypeRef> {
    if !ty.is_named(SYSTEM, NULLABLE, 1) {
        return None;
    }
    let value_type = match host.resolve(ty) {
        Some(decl) => decl.kind.contains(TypeKind::VALUE_TYPE),
        None => true,
    };
    if value_type {
        ty.type_args().first()
    } else {
        None
    }
}

fn is_clonable(host: &dyn TypeHost, ty: &TypeRef, module: &str) -> bool {
    TypeDescriptor::of(host, ty).is_some_and(|view| view.is_clonable(module))
}

/// Classify a member of declared type `ty`.
pub fn classify(
    host: &dyn TypeHost,
    ty: &TypeRef,
    nullability: Nullability,
    module: &str,
) -> MemberFlags {
    let mut flags = MemberFlags::NONE;
    let (ty, member_nullable) = strip_nullable(host, ty, nullability);
    flags.member_nullable = member_nullable;

    let element = match TypeShape::of(host, &ty, module) {
        TypeShape::Array { element } | TypeShape::Sequence { element } => {
            flags.enumerable = true;
            element
        }
        TypeShape::Reconstructible { element } => {
            flags.enumerable = true;
            flags.new_collection = true;
            element
        }
        TypeShape::Clonable => {
            flags.clonable = true;
            return flags;
        }
        TypeShape::Plain => return flags,
    };

    let (element, element_nullable) = strip_nullable(host, &element, nullability);
    flags.element_nullable = element_nullable;
    flags.clonable = is_clonable(host, &element, module);
    flags
}
