//! Dolly IR - host type model.
//!
//! This crate describes the declared types that the clone generator analyzes.
//! It plays the role of the host compiler's symbol model:
//! - `TypeRef`: a *use* of a type (member type, parameter type, base type)
//! - `TypeDecl`: a *declaration* (kind, base, interfaces, members, constructors)
//! - `TypeHost` / `TypeTable`: name resolution over declarations
//! - `TypeDescriptor`: the read-only query surface the model builder consumes
//!
//! Everything here is plain data. Nothing is executed and nothing is mutated
//! once a `TypeTable` has been assembled, so descriptors can be shared freely
//! across threads.

mod decl;
mod descriptor;
mod name;
mod prelude;
mod table;
mod type_ref;
pub mod well_known;

pub use decl::{ConstructorDecl, MemberDecl, MemberOrigin, Parameter, TypeDecl, TypeKind};
pub use descriptor::TypeDescriptor;
pub use name::QualifiedName;
pub use table::{TypeHost, TypeTable};
pub use type_ref::{Substitution, TypeRef};
