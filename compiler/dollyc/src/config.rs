//! Generator options.
//!
//! Options come from the command line and override what the input
//! compilation says about itself (module name, nullability context).

use std::path::PathBuf;

use dolly_diagnostic::emitter::ColorMode;

/// How diagnostics are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    /// Human-readable, optionally coloured, on stderr.
    #[default]
    Human,
    /// A JSON array on stderr.
    Json,
}

impl ErrorFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "human" => Some(ErrorFormat::Human),
            "json" => Some(ErrorFormat::Json),
            _ => None,
        }
    }
}

/// Options for `dolly generate` and `dolly check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Module the support types live in. Overrides the input's own.
    pub module: Option<String>,
    /// Nullability context. Overrides the input's own.
    pub nullable: Option<bool>,
    /// Directory generated files are written to. Nothing is written without
    /// one.
    pub out_dir: Option<PathBuf>,
    /// Only generate for the type with this simple or qualified name.
    pub type_filter: Option<String>,
    pub error_format: ErrorFormat,
    pub color: ColorMode,
    /// Worker threads; `None` uses one per core.
    pub jobs: Option<usize>,
    /// Report what would be written without writing.
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Merge options from `other`, taking its value wherever it sets one.
    pub fn merge(&mut self, other: &Self) {
        if other.module.is_some() {
            self.module.clone_from(&other.module);
        }
        if other.nullable.is_some() {
            self.nullable = other.nullable;
        }
        if other.out_dir.is_some() {
            self.out_dir.clone_from(&other.out_dir);
        }
        if other.type_filter.is_some() {
            self.type_filter.clone_from(&other.type_filter);
        }
        if other.error_format != ErrorFormat::Human {
            self.error_format = other.error_format;
        }
        if other.color != ColorMode::Auto {
            self.color = other.color;
        }
        if other.jobs.is_some() {
            self.jobs = other.jobs;
        }
        self.dry_run |= other.dry_run;
    }
}

/// Parse generator flags. Unknown flags and bad values produce a warning and
/// are otherwise ignored.
pub fn parse_generate_options(args: &[String]) -> GenerateOptions {
    let mut options = GenerateOptions::default();

    for arg in args {
        if let Some(module) = arg.strip_prefix("--module=") {
            options.module = Some(module.to_string());
        } else if arg == "--no-nullable" {
            options.nullable = Some(false);
        } else if arg == "--nullable" {
            options.nullable = Some(true);
        } else if let Some(dir) = arg.strip_prefix("--out-dir=") {
            options.out_dir = Some(PathBuf::from(dir));
        } else if let Some(dir) = arg.strip_prefix("-o=") {
            options.out_dir = Some(PathBuf::from(dir));
        } else if let Some(name) = arg.strip_prefix("--type=") {
            options.type_filter = Some(name.to_string());
        } else if let Some(format) = arg.strip_prefix("--error-format=") {
            if let Some(format) = ErrorFormat::from_str(format) {
                options.error_format = format;
            } else {
                eprintln!("warning: unknown error format '{format}', using human");
            }
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            match mode.parse::<ColorMode>() {
                Ok(mode) => options.color = mode,
                Err(e) => eprintln!("warning: {e}"),
            }
        } else if let Some(jobs) = arg.strip_prefix("--jobs=") {
            match jobs.parse::<usize>() {
                Ok(n) if n > 0 => options.jobs = Some(n),
                _ => eprintln!("warning: invalid job count '{jobs}', using all cores"),
            }
        } else if arg == "--dry-run" {
            options.dry_run = true;
        } else {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}
