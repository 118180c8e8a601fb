//! Classification errors.

use dolly_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// Why a type cannot get clone methods.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ClassificationError {
    /// The type is abstract.
    #[error("cannot generate clone methods for abstract type `{type_name}`")]
    AbstractType { type_name: String },

    /// No constructor can be called with the collected members.
    #[error("no valid constructor found for `{type_name}`")]
    NoValidConstructor {
        type_name: String,
        /// Readonly members, which must all be constructor parameters.
        required: Vec<String>,
        /// Every collected member.
        members: Vec<String>,
    },
}

impl ClassificationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ClassificationError::AbstractType { .. } => ErrorCode::E1001,
            ClassificationError::NoValidConstructor { .. } => ErrorCode::E1002,
        }
    }

    /// Fully-qualified name of the rejected type.
    pub fn type_name(&self) -> &str {
        match self {
            ClassificationError::AbstractType { type_name }
            | ClassificationError::NoValidConstructor { type_name, .. } => type_name,
        }
    }

    /// Convert to a diagnostic with fix hints.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_subject(self.type_name());

        match self {
            ClassificationError::AbstractType { .. } => diag
                .with_note("an abstract type cannot be constructed by its clone methods")
                .with_suggestion("mark the concrete subclasses `[Clonable]` instead"),
            ClassificationError::NoValidConstructor {
                required, members, ..
            } => diag
                .with_note(format!(
                    "a constructor may only take parameters named after members ({})",
                    members.join(", ")
                ))
                .with_note(format!(
                    "and must take every readonly member ({})",
                    required.join(", ")
                ))
                .with_suggestion(
                    "add a constructor whose parameters match the readonly members, \
                     or mark members `[CloneIgnore]`",
                ),
        }
    }
}
