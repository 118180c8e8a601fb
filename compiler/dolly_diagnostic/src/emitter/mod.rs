//! Writing a batch of diagnostics out.
//!
//! [`TerminalEmitter`] renders for people and [`JsonEmitter`] for tools. Both
//! are driven through [`DiagnosticEmitter::report`], which writes every
//! diagnostic and then closes the report with its [`Tally`].

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Diagnostic, Severity};

/// Error and warning counts of one report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub errors: usize,
    pub warnings: usize,
}

impl Tally {
    pub fn of(diagnostics: &[Diagnostic]) -> Self {
        diagnostics
            .iter()
            .fold(Tally::default(), |mut tally, diagnostic| {
                match diagnostic.severity {
                    Severity::Error => tally.errors += 1,
                    Severity::Warning => tally.warnings += 1,
                }
                tally
            })
    }
}

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Close the report. Called once, after the last diagnostic.
    fn finish(&mut self, tally: Tally);

    fn report(&mut self, diagnostics: &[Diagnostic]) -> Tally {
        let tally = Tally::of(diagnostics);
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
        self.finish(tally);
        tally
    }
}

#[cfg(test)]
mod tests;
