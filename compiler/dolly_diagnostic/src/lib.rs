//! Diagnostic system for the clone generator.
//!
//! Every failure the generator reports to a user goes through here:
//! - Error codes for searchability (`dolly explain E1002`)
//! - A message saying what went wrong
//! - The subject it went wrong on (a fully-qualified type name or a file)
//! - Notes and suggestions saying how to fix it
//!
//! Domain crates keep their own typed errors and convert them with
//! `to_diagnostic()` at the boundary.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
