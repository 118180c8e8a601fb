//! The `check` command: classify every marked type without generating.

use std::path::Path;

use dolly_diagnostic::Diagnostic;

use crate::config::{ErrorFormat, GenerateOptions};
use crate::input::load;
use crate::pipeline::{classify_all, Session};

use super::report;

/// Classify the compilation at `path` and report every type that cannot get
/// clone methods.
///
/// In human mode each classified model is listed on stdout with its flags
/// and members.
pub fn check_file(path: &str, options: &GenerateOptions) -> bool {
    let compilation = match load(Path::new(path)) {
        Ok(compilation) => compilation,
        Err(err) => {
            report(&[err.to_diagnostic()], options);
            return false;
        }
    };

    let session = Session::new(&compilation, options);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for result in classify_all(&compilation, &session) {
        match result {
            Ok(model) => {
                if options.error_format == ErrorFormat::Human {
                    println!("{}: {}", model.qualified_name(), model.flags);
                    for member in &model.constructor_members {
                        println!("  new({member})");
                    }
                    for member in &model.members {
                        println!("  {member}");
                    }
                }
            }
            Err(diag) => diagnostics.push(diag),
        }
    }

    report(&diagnostics, options) == 0
}
