//! Error codes for all generator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase. Used for `explain` lookups and documentation.

use std::fmt;

use serde::Serialize;

/// Error codes for all generator diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Input errors (reading and decoding the type table)
/// - E1xxx: Classification errors (building a clone model)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum ErrorCode {
    // Input Errors (E0xxx)
    /// Input file could not be read
    E0001,
    /// Malformed type table
    E0002,
    /// Requested type not found
    E0003,
    /// Several types share a simple name
    E0004,

    // Classification Errors (E1xxx)
    /// Abstract type cannot be cloned
    E1001,
    /// No constructor can be used for cloning
    E1002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
        }
    }

    /// Parse a code as written by a user. Case-insensitive.
    pub fn parse(code: &str) -> Option<ErrorCode> {
        let code = code.trim();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
