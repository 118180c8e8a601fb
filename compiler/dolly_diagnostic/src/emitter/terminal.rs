//! Human-readable diagnostics, optionally colored with ANSI escapes.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::{Diagnostic, Severity};

use super::{DiagnosticEmitter, Tally};

#[derive(Clone, Copy)]
enum Style {
    Error,
    Warning,
    Help,
    Bold,
    Subject,
}

impl Style {
    fn escape(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Help => "\x1b[1;32m",
            Style::Bold => "\x1b[1m",
            Style::Subject => "\x1b[1;34m",
        }
    }

    fn of(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Text that carries its style only when colors are on.
struct Painted<'a> {
    text: &'a str,
    style: Option<Style>,
}

fn paint(text: &str, style: Style, colored: bool) -> Painted<'_> {
    Painted {
        text,
        style: colored.then_some(style),
    }
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Some(style) => write!(f, "{}{}{RESET}", style.escape(), self.text),
            None => f.write_str(self.text),
        }
    }
}

fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// When to color terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode `{other}`")),
        }
    }
}

/// Renders each diagnostic as a header line followed by indented
/// subject, note and help lines.
pub struct TerminalEmitter<W: Write> {
    out: W,
    colored: bool,
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::new(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(out: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            out,
            colored: mode.enabled(is_tty),
        }
    }

    fn write_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let colored = self.colored;
        let severity = diagnostic.severity.to_string();
        let code = format!("[{}]", diagnostic.code);
        writeln!(
            self.out,
            "{}{}: {}",
            paint(&severity, Style::of(diagnostic.severity), colored),
            paint(&code, Style::Bold, colored),
            diagnostic.message
        )?;
        if let Some(subject) = &diagnostic.subject {
            writeln!(self.out, "  --> {}", paint(subject, Style::Subject, colored))?;
        }
        for note in &diagnostic.notes {
            writeln!(self.out, "  = {}: {note}", paint("note", Style::Bold, colored))?;
        }
        for suggestion in &diagnostic.suggestions {
            writeln!(
                self.out,
                "  = {}: {suggestion}",
                paint("help", Style::Help, colored)
            )?;
        }
        writeln!(self.out)
    }

    fn write_summary(&mut self, tally: Tally) -> io::Result<()> {
        let colored = self.colored;
        let warnings = counted(tally.warnings, "warning");
        match (tally.errors, tally.warnings) {
            (0, 0) => Ok(()),
            (0, _) => writeln!(
                self.out,
                "{}: {warnings} emitted",
                paint("warning", Style::Warning, colored)
            ),
            (errors, 0) => writeln!(
                self.out,
                "{}: generation failed with {}",
                paint("error", Style::Error, colored),
                counted(errors, "error")
            ),
            (errors, _) => writeln!(
                self.out,
                "{}: generation failed with {} and {warnings}",
                paint("error", Style::Error, colored),
                counted(errors, "error")
            ),
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // A closed stderr leaves nowhere to report to.
        let _ = self.write_diagnostic(diagnostic);
    }

    fn finish(&mut self, tally: Tally) {
        let _ = self.write_summary(tally);
        let _ = self.out.flush();
    }
}
