//! Dolly Gen - render clone models as source text.
//!
//! [`render`] turns a [`Model`](dolly_model::Model) into the partial
//! re-declaration of its type carrying `DeepClone()` and `ShallowClone()`.
//! [`support_sources`] produces the marker attributes and the clone
//! interface that generated code refers to, once per module.
//!
//! Rendering is total: every model, including flag combinations the builder
//! never produces, renders to some text.

mod emitter;
mod expr;
mod modifiers;
mod source;
mod support;

pub use emitter::{Emitter, StringEmitter};
pub use expr::{render_expression, CloneDepth};
pub use modifiers::{method_modifiers, type_modifiers};
pub use source::{render, GeneratedSource};
pub use support::support_sources;
