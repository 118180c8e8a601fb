//! Namespace-qualified type names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A namespace-qualified type name, e.g. `System.Collections.Generic.List`.
///
/// Generic arity is not part of the name: `List<T>` is keyed as `List`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Containing namespace (empty for the global namespace).
    #[serde(default)]
    pub namespace: String,
    /// Simple type name.
    pub name: String,
}

impl QualifiedName {
    /// Create a new qualified name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        QualifiedName {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Check whether this name matches the given namespace and simple name.
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}
