//! Type uses.
//!
//! A `TypeRef` is how a member, parameter, base type or interface *refers* to
//! a type. It carries the reference-nullability annotation (`T?` on a
//! reference type) at every level, so `List<SimpleClass?>?` keeps both the
//! member-level and the element-level annotation.
//!
//! Nullable value types are not an annotation: `int?` is the named type
//! `System.Nullable<int>`, exactly as the host reports it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::QualifiedName;

/// A reference to a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A named (possibly generic) type: `SimpleClass`, `List<int>`.
    Named {
        #[serde(default)]
        namespace: String,
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeRef>,
        /// Annotated as possibly absent (`?` on a reference type).
        #[serde(default)]
        nullable: bool,
    },
    /// A single-dimensional array: `SimpleClass[]`.
    Array {
        element: Box<TypeRef>,
        #[serde(default)]
        nullable: bool,
    },
    /// A generic type parameter of the enclosing declaration: `T`.
    Param {
        name: String,
        #[serde(default)]
        nullable: bool,
    },
}

impl TypeRef {
    /// A non-generic named type.
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Named {
            namespace: namespace.into(),
            name: name.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    /// A constructed generic type.
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        args: Vec<TypeRef>,
    ) -> Self {
        TypeRef::Named {
            namespace: namespace.into(),
            name: name.into(),
            args,
            nullable: false,
        }
    }

    /// An array of `element`.
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            nullable: false,
        }
    }

    /// A reference to a generic parameter.
    pub fn param(name: impl Into<String>) -> Self {
        TypeRef::Param {
            name: name.into(),
            nullable: false,
        }
    }

    /// Mark this use as annotated nullable (`T?`).
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.set_annotation(true);
        self
    }

    /// This use with its top-level annotation removed.
    #[must_use]
    pub fn without_annotation(&self) -> Self {
        let mut stripped = self.clone();
        stripped.set_annotation(false);
        stripped
    }

    fn set_annotation(&mut self, value: bool) {
        match self {
            TypeRef::Named { nullable, .. }
            | TypeRef::Array { nullable, .. }
            | TypeRef::Param { nullable, .. } => *nullable = value,
        }
    }

    /// Whether the top level carries a `?` annotation.
    pub fn is_annotated(&self) -> bool {
        match self {
            TypeRef::Named { nullable, .. }
            | TypeRef::Array { nullable, .. }
            | TypeRef::Param { nullable, .. } => *nullable,
        }
    }

    /// The qualified name of a named type.
    pub fn qualified_name(&self) -> Option<QualifiedName> {
        match self {
            TypeRef::Named {
                namespace, name, ..
            } => Some(QualifiedName::new(namespace.clone(), name.clone())),
            TypeRef::Array { .. } | TypeRef::Param { .. } => None,
        }
    }

    /// Whether this is the named type `namespace.name` with `arity` type arguments.
    pub fn is_named(&self, expected_namespace: &str, expected_name: &str, arity: usize) -> bool {
        matches!(
            self,
            TypeRef::Named { namespace, name, args, .. }
                if namespace == expected_namespace && name == expected_name && args.len() == arity
        )
    }

    /// Type arguments of a named type (empty otherwise).
    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named { args, .. } => args,
            TypeRef::Array { .. } | TypeRef::Param { .. } => &[],
        }
    }

    /// Replace generic parameters according to `subst`.
    ///
    /// An annotated parameter (`T?`) keeps its annotation after substitution.
    #[must_use]
    pub fn substitute(&self, subst: &Substitution) -> TypeRef {
        match self {
            TypeRef::Param { name, nullable } => match subst.get(name) {
                Some(bound) if *nullable => bound.clone().nullable(),
                Some(bound) => bound.clone(),
                None => self.clone(),
            },
            TypeRef::Array { element, nullable } => TypeRef::Array {
                element: Box::new(element.substitute(subst)),
                nullable: *nullable,
            },
            TypeRef::Named {
                namespace,
                name,
                args,
                nullable,
            } => TypeRef::Named {
                namespace: namespace.clone(),
                name: name.clone(),
                args: args.iter().map(|arg| arg.substitute(subst)).collect(),
                nullable: *nullable,
            },
        }
    }

    /// Structural equality that ignores nullability annotations at every level.
    ///
    /// Matches the host's default symbol equality, under which
    /// `IEnumerable<string?>` and `IEnumerable<string>` are the same type.
    pub fn same_type(&self, other: &TypeRef) -> bool {
        match (self, other) {
            (
                TypeRef::Named {
                    namespace: ns_a,
                    name: name_a,
                    args: args_a,
                    ..
                },
                TypeRef::Named {
                    namespace: ns_b,
                    name: name_b,
                    args: args_b,
                    ..
                },
            ) => {
                ns_a == ns_b
                    && name_a == name_b
                    && args_a.len() == args_b.len()
                    && args_a.iter().zip(args_b).all(|(a, b)| a.same_type(b))
            }
            (TypeRef::Array { element: a, .. }, TypeRef::Array { element: b, .. }) => {
                a.same_type(b)
            }
            (TypeRef::Param { name: a, .. }, TypeRef::Param { name: b, .. }) => a == b,
            _ => false,
        }
    }

    /// Fully-qualified rendering: `System.Collections.Generic.List<Dolly.SimpleClass>`.
    pub fn full_name(&self) -> String {
        match self {
            TypeRef::Named {
                namespace,
                name,
                args,
                ..
            } => {
                let mut out = QualifiedName::new(namespace.clone(), name.clone()).to_string();
                if !args.is_empty() {
                    let rendered: Vec<String> = args.iter().map(TypeRef::full_name).collect();
                    out.push('<');
                    out.push_str(&rendered.join(", "));
                    out.push('>');
                }
                out
            }
            TypeRef::Array { element, .. } => format!("{}[]", element.full_name()),
            TypeRef::Param { name, .. } => name.clone(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name, args, .. } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
            }
            TypeRef::Array { element, .. } => write!(f, "{element}[]")?,
            TypeRef::Param { name, .. } => write!(f, "{name}")?,
        }
        if self.is_annotated() {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// Binding of generic parameter names to type arguments.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Substitution {
    bindings: Vec<(String, TypeRef)>,
}

impl Substitution {
    /// Bind `params` positionally to `args`.
    ///
    /// Extra parameters or arguments are ignored.
    pub fn new(params: &[String], args: &[TypeRef]) -> Self {
        Substitution {
            bindings: params.iter().cloned().zip(args.iter().cloned()).collect(),
        }
    }

    /// Look up the binding for a parameter.
    pub fn get(&self, param: &str) -> Option<&TypeRef> {
        self.bindings
            .iter()
            .find(|(name, _)| name == param)
            .map(|(_, ty)| ty)
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests;
