//! The `generate` command: write clone methods for every marked type.

use std::path::Path;

use dolly_diagnostic::{Diagnostic, ErrorCode};

use crate::config::GenerateOptions;
use crate::input::load;
use crate::persist::persist_all;
use crate::pipeline::{generate, Session};

use super::report;

/// Generate sources for the compilation at `path`.
///
/// With an output directory the sources are persisted there; otherwise they
/// are printed to stdout, each preceded by a `// <hint name>` line. Sources
/// of types that generated fine are written even when others failed.
pub fn generate_file(path: &str, options: &GenerateOptions) -> bool {
    let compilation = match load(Path::new(path)) {
        Ok(compilation) => compilation,
        Err(err) => {
            report(&[err.to_diagnostic()], options);
            return false;
        }
    };

    let session = Session::new(&compilation, options);
    let generation = generate(&compilation, &session);
    let mut diagnostics: Vec<Diagnostic> = generation.diagnostics().cloned().collect();

    if let Some(dir) = &options.out_dir {
        match persist_all(dir, generation.sources(), options.dry_run) {
            Ok(summary) => {
                if options.dry_run {
                    eprintln!(
                        "{} file(s) would be written, {} unchanged",
                        summary.would_write, summary.unchanged
                    );
                } else {
                    eprintln!(
                        "{} file(s) written, {} unchanged",
                        summary.written, summary.unchanged
                    );
                }
            }
            Err((failed, e)) => diagnostics.push(
                Diagnostic::error(ErrorCode::E0001)
                    .with_message(format!("could not write `{}`: {e}", failed.display()))
                    .with_subject(failed.display().to_string()),
            ),
        }
    } else {
        for source in generation.sources() {
            println!("// {}", source.hint_name);
            println!("{}", source.text);
            println!();
        }
    }

    report(&diagnostics, options) == 0
}
