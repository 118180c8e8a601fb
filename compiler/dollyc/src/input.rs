//! Input compilations.
//!
//! A compilation is a JSON document describing the types of one module:
//!
//! ```json
//! { "module": "Shop", "nullable": true, "types": [ ... ] }
//! ```
//!
//! `types` holds [`TypeDecl`]s. The prelude of well-known library types is
//! added on load, so inputs only describe their own declarations.

use std::path::{Path, PathBuf};

use dolly_diagnostic::{Diagnostic, ErrorCode};
use dolly_ir::well_known::is_clonable_attribute_spelling;
use dolly_ir::{TypeDecl, TypeKind, TypeTable};
use dolly_model::Nullability;
use serde::Deserialize;
use thiserror::Error;

/// Module name used when neither the input nor the options give one.
pub const DEFAULT_MODULE: &str = "App";

fn default_nullable() -> bool {
    true
}

/// One module's declared types.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Compilation {
    #[serde(default)]
    pub module: Option<String>,
    /// Whether reference nullability annotations are tracked.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl Compilation {
    /// Parse a compilation from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The module name, with `DEFAULT_MODULE` as the fallback.
    pub fn module_name(&self) -> &str {
        self.module.as_deref().unwrap_or(DEFAULT_MODULE)
    }

    pub fn nullability(&self) -> Nullability {
        Nullability::from(self.nullable)
    }

    /// The prelude plus every declared type.
    ///
    /// A declaration with the same name as a prelude type replaces it.
    pub fn table(&self) -> TypeTable {
        let mut table = TypeTable::with_prelude();
        table.extend(self.types.iter().cloned());
        table
    }

    /// Declarations marked for generation, in input order.
    ///
    /// A class, struct or record is a candidate when it carries an attribute
    /// spelled `Clonable` or `ClonableAttribute`, whatever its namespace.
    pub fn candidates(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.iter().filter(|decl| {
            !decl.kind.contains(TypeKind::INTERFACE)
                && decl
                    .attributes
                    .iter()
                    .any(|a| is_clonable_attribute_spelling(&a.name))
        })
    }
}

/// Why an input could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read `{}`: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` is not a valid type table: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoadError::Unreadable { .. } => ErrorCode::E0001,
            LoadError::Malformed { .. } => ErrorCode::E0002,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::Unreadable { path, .. } | LoadError::Malformed { path, .. } => path,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_subject(self.path().display().to_string());
        match self {
            LoadError::Unreadable { .. } => diag,
            LoadError::Malformed { source, .. } => diag.with_note(format!(
                "at line {}, column {}",
                source.line(),
                source.column()
            )),
        }
    }
}

/// Read and parse a compilation file.
#[tracing::instrument(level = "debug")]
pub fn load(path: &Path) -> Result<Compilation, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let compilation = Compilation::from_json(&text).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(types = compilation.types.len(), "loaded compilation");
    Ok(compilation)
}
