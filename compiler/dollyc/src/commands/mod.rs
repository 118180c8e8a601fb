//! Command handlers for the `dolly` CLI.
//!
//! Each handler returns whether it succeeded; the binary turns a failure
//! into exit code 1. Diagnostic reporting shared by all handlers lives here.

use std::io::IsTerminal;

use dolly_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use dolly_diagnostic::Diagnostic;

use crate::config::{ErrorFormat, GenerateOptions};

mod check;
mod explain;
mod generate;

pub use check::check_file;
pub use explain::explain_error;
pub use generate::generate_file;

/// Report `diagnostics` on stderr in the configured format. Returns the
/// error count.
pub(crate) fn report(diagnostics: &[Diagnostic], options: &GenerateOptions) -> usize {
    let tally = match options.error_format {
        ErrorFormat::Human => {
            let is_tty = std::io::stderr().is_terminal();
            TerminalEmitter::stderr(options.color, is_tty).report(diagnostics)
        }
        ErrorFormat::Json => JsonEmitter::new(std::io::stderr()).report(diagnostics),
    };
    tally.errors
}
