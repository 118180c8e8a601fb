//! Machine-readable diagnostics: one JSON array per report.

use std::io::Write;

use crate::Diagnostic;

use super::{DiagnosticEmitter, Tally};

/// Writes each diagnostic as one array element on its own line. The array is
/// opened by the first diagnostic and closed by [`DiagnosticEmitter::finish`].
pub struct JsonEmitter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(out: W) -> Self {
        JsonEmitter { out, written: 0 }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let separator = if self.written == 0 { "[" } else { "," };
        let _ = write!(self.out, "{separator}\n  ");
        let _ = serde_json::to_writer(&mut self.out, diagnostic);
        self.written += 1;
    }

    fn finish(&mut self, _tally: Tally) {
        let close = if self.written == 0 { "[]" } else { "\n]" };
        let _ = writeln!(self.out, "{close}");
        let _ = self.out.flush();
    }
}
