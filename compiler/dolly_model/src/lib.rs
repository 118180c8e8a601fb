//! Dolly Model - classify a declared type for clone generation.
//!
//! [`build`] turns a [`TypeDescriptor`](dolly_ir::TypeDescriptor) into a
//! [`Model`]: the members to copy (each classified by how its value must be
//! duplicated), the constructor to call, and the type-level facts the
//! synthesizer needs to pick modifiers.
//!
//! Classification is purely static. Nothing is instantiated and the host is
//! only ever read.

mod builder;
mod classify;
mod constructor;
mod error;
mod flags;
mod model;

#[cfg(test)]
mod test_fixtures;

pub use builder::build;
pub use classify::{classify, Nullability, TypeShape};
pub use error::ClassificationError;
pub use flags::{MemberFlags, ModelFlags};
pub use model::{Member, Model};
