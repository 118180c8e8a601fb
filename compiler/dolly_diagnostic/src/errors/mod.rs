//! Long-form explanations shown by `dolly explain`.
//!
//! One markdown page per code, embedded at build time. A page opens with a
//! `# <code>: <title>` heading.

use crate::ErrorCode;

/// Embedded documentation pages keyed by error code.
pub struct ErrorDocs;

impl ErrorDocs {
    pub fn get(code: ErrorCode) -> &'static str {
        match code {
            ErrorCode::E0001 => include_str!("E0001.md"),
            ErrorCode::E0002 => include_str!("E0002.md"),
            ErrorCode::E0003 => include_str!("E0003.md"),
            ErrorCode::E0004 => include_str!("E0004.md"),
            ErrorCode::E1001 => include_str!("E1001.md"),
            ErrorCode::E1002 => include_str!("E1002.md"),
        }
    }

    /// The page heading without its code, e.g. `Abstract Type`.
    pub fn title(code: ErrorCode) -> &'static str {
        let heading = Self::get(code).lines().next().unwrap_or_default();
        heading
            .split_once(": ")
            .map_or(heading, |(_, title)| title)
            .trim()
    }
}
