//! Classify and render every candidate of a compilation.
//!
//! Candidates are processed in parallel and results are collected in input
//! order, so repeated runs over the same input give identical output. A type
//! that cannot be classified yields a diagnostic; it never stops the others.

use dolly_diagnostic::{Diagnostic, ErrorCode};
use dolly_gen::{render, support_sources, GeneratedSource};
use dolly_ir::{TypeDecl, TypeDescriptor, TypeHost, TypeTable};
use dolly_model::{build, Model, Nullability};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::config::GenerateOptions;
use crate::input::Compilation;

/// What generation produced for one candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(GeneratedSource),
    Failed(Diagnostic),
}

impl GenerationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failed(_))
    }
}

/// Settings resolved from the compilation and the options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub module: String,
    pub nullability: Nullability,
    pub type_filter: Option<String>,
    pub jobs: Option<usize>,
}

impl Session {
    /// Options win over what the compilation says about itself.
    pub fn new(compilation: &Compilation, options: &GenerateOptions) -> Self {
        Session {
            module: options
                .module
                .clone()
                .unwrap_or_else(|| compilation.module_name().to_string()),
            nullability: options
                .nullable
                .map_or_else(|| compilation.nullability(), Nullability::from),
            type_filter: options.type_filter.clone(),
            jobs: options.jobs,
        }
    }

    fn selects(&self, decl: &TypeDecl) -> bool {
        match &self.type_filter {
            None => true,
            Some(wanted) => decl.name == *wanted || decl.qualified_name().to_string() == *wanted,
        }
    }
}

/// Everything generated for one compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// The module's attribute and interface sources.
    pub support: Vec<GeneratedSource>,
    /// One outcome per selected candidate, in input order.
    pub outcomes: Vec<GenerationOutcome>,
    /// Batch-level findings that did not stop any candidate.
    pub warnings: Vec<Diagnostic>,
}

impl Generation {
    /// Support sources followed by every generated type, in order.
    pub fn sources(&self) -> impl Iterator<Item = &GeneratedSource> {
        self.support
            .iter()
            .chain(self.outcomes.iter().filter_map(|outcome| match outcome {
                GenerationOutcome::Generated(source) => Some(source),
                GenerationOutcome::Failed(_) => None,
            }))
    }

    /// Failures in candidate order, then batch warnings.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                GenerationOutcome::Failed(diag) => Some(diag),
                GenerationOutcome::Generated(_) => None,
            })
            .chain(&self.warnings)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().any(Diagnostic::is_error)
    }
}

fn classify_one(
    host: &dyn TypeHost,
    decl: &TypeDecl,
    session: &Session,
) -> Result<Model, Diagnostic> {
    let view = TypeDescriptor::new(host, decl);
    build(&view, session.nullability, &session.module).map_err(|err| err.to_diagnostic())
}

/// Run `f` over `items` in parallel, preserving order.
///
/// With an explicit job count a scoped pool is built; if that fails the work
/// runs sequentially.
fn par_map<T, R, F>(items: &[T], jobs: Option<usize>, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let Some(jobs) = jobs else {
        return items.par_iter().map(&f).collect();
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| items.par_iter().map(&f).collect::<Vec<_>>())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            items.iter().map(&f).collect()
        })
}

/// Simple names carried by more than one selected type, in order of first
/// appearance.
///
/// Sources of these types are named after their qualified name instead, so
/// no file overwrites another.
fn shared_names<'c>(decls: &[&'c TypeDecl]) -> Vec<&'c str> {
    let mut seen = FxHashSet::default();
    let mut shared: Vec<&str> = Vec::new();
    for &decl in decls {
        let name = decl.name.as_str();
        if !seen.insert(name) && !shared.contains(&name) {
            shared.push(name);
        }
    }
    shared
}

fn shared_name_warning(name: &str, decls: &[&TypeDecl]) -> Diagnostic {
    let files: Vec<String> = decls
        .iter()
        .filter(|decl| decl.name == name)
        .map(|decl| format!("{}.g.cs", decl.qualified_name()))
        .collect();
    Diagnostic::warning(ErrorCode::E0004)
        .with_message(format!(
            "{} clonable types are named `{name}`",
            files.len()
        ))
        .with_subject(name)
        .with_note(format!("sources are named {}", files.join(", ")))
}

/// The candidates `session` selects, or a diagnostic when a requested type
/// is not among them.
fn selected<'c>(
    compilation: &'c Compilation,
    session: &Session,
) -> Result<Vec<&'c TypeDecl>, Diagnostic> {
    let selected: Vec<&TypeDecl> = compilation
        .candidates()
        .filter(|decl| session.selects(decl))
        .collect();
    match &session.type_filter {
        Some(wanted) if selected.is_empty() => Err(Diagnostic::error(ErrorCode::E0003)
            .with_message(format!("no type marked `[Clonable]` is named `{wanted}`"))
            .with_subject(wanted.clone())
            .with_suggestion("use the simple or namespace-qualified name of a marked type")),
        _ => Ok(selected),
    }
}

/// Classify every selected candidate without rendering.
#[tracing::instrument(level = "debug", skip_all, fields(module = %session.module))]
pub fn classify_all(
    compilation: &Compilation,
    session: &Session,
) -> Vec<Result<Model, Diagnostic>> {
    let table: TypeTable = compilation.table();
    match selected(compilation, session) {
        Ok(decls) => par_map(decls.as_slice(), session.jobs, |decl| {
            classify_one(&table, decl, session)
        }),
        Err(diag) => vec![Err(diag)],
    }
}

/// Classify and render every selected candidate.
#[tracing::instrument(level = "debug", skip_all, fields(module = %session.module))]
pub fn generate(compilation: &Compilation, session: &Session) -> Generation {
    let table: TypeTable = compilation.table();
    let mut warnings = Vec::new();
    let outcomes = match selected(compilation, session) {
        Ok(decls) => {
            let shared = shared_names(&decls);
            warnings.extend(shared.iter().map(|name| shared_name_warning(name, &decls)));
            par_map(decls.as_slice(), session.jobs, |decl| {
                match classify_one(&table, decl, session) {
                    Ok(model) => {
                        let mut source = render(&model);
                        if shared.contains(&decl.name.as_str()) {
                            source.hint_name = format!("{}.g.cs", decl.qualified_name());
                        }
                        GenerationOutcome::Generated(source)
                    }
                    Err(diag) => GenerationOutcome::Failed(diag),
                }
            })
        }
        Err(diag) => vec![GenerationOutcome::Failed(diag)],
    };

    tracing::debug!(
        candidates = outcomes.len(),
        failed = outcomes.iter().filter(|o| o.is_failure()).count(),
        "generation finished"
    );
    Generation {
        support: support_sources(&session.module).into(),
        outcomes,
        warnings,
    }
}
