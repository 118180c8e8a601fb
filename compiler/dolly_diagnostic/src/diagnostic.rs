//! The diagnostic record every reported failure becomes.

use std::fmt;

use serde::Serialize;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// A diagnostic message with its code, subject and fix hints.
///
/// There are no source spans: the generator reasons about declared types,
/// so the subject is the fully-qualified type name (or the input file for
/// input errors).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// What the diagnostic is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            subject: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Diagnostic::new(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic::new(code, Severity::Warning)
    }

    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_subject(self, subject: impl Into<String>) -> Self {
        Diagnostic {
            subject: Some(subject.into()),
            ..self
        }
    }

    /// Append a line of context, e.g. the members a constructor must cover.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Append a proposed fix.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Single-line header followed by one indented line per subject, note and
/// suggestion.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        let subject = self.subject.iter().map(|s| ("-->", s));
        let notes = self.notes.iter().map(|n| ("= note:", n));
        let suggestions = self.suggestions.iter().map(|h| ("= help:", h));
        for (label, text) in subject.chain(notes).chain(suggestions) {
            write!(f, "\n  {label} {text}")?;
        }
        Ok(())
    }
}
