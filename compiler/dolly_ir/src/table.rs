//! Name resolution over declared types.

use rustc_hash::FxHashMap;

use crate::{QualifiedName, TypeDecl, TypeKind, TypeRef};

/// Read-only access to the host's declared types.
///
/// Implemented by [`TypeTable`]; other hosts (an IDE model, a compiler
/// plugin) can implement it directly over their own symbol storage.
pub trait TypeHost: Sync {
    /// Look up a declaration by qualified name.
    fn lookup(&self, name: &QualifiedName) -> Option<&TypeDecl>;

    /// Look up the declaration a type use refers to.
    ///
    /// Arrays and generic parameters have no declaration.
    fn resolve(&self, ty: &TypeRef) -> Option<&TypeDecl> {
        match ty {
            TypeRef::Named {
                namespace, name, ..
            } => self.lookup(&QualifiedName::new(namespace.clone(), name.clone())),
            TypeRef::Array { .. } | TypeRef::Param { .. } => None,
        }
    }

    /// Whether values of `ty` are references (and so may be null).
    ///
    /// Arrays are references. An unconstrained generic parameter is neither
    /// a reference nor a value type and reports `false`. A name the host
    /// does not know is assumed to be a reference type.
    fn is_reference_type(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Array { .. } => true,
            TypeRef::Param { .. } => false,
            TypeRef::Named { .. } => !self
                .resolve(ty)
                .is_some_and(|decl| decl.kind.contains(TypeKind::VALUE_TYPE)),
        }
    }
}

/// A table of declarations, iterated in insertion order.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    decls: Vec<TypeDecl>,
    index: FxHashMap<QualifiedName, usize>,
}

impl TypeTable {
    /// An empty table.
    pub fn new() -> Self {
        TypeTable::default()
    }

    /// A table seeded with the well-known library shapes.
    pub fn with_prelude() -> Self {
        let mut table = TypeTable::new();
        table.extend(crate::prelude::declarations());
        table
    }

    /// Insert a declaration, replacing any previous one with the same name.
    ///
    /// A replaced declaration keeps its original position.
    pub fn insert(&mut self, decl: TypeDecl) {
        let key = decl.qualified_name();
        if let Some(&slot) = self.index.get(&key) {
            self.decls[slot] = decl;
        } else {
            self.index.insert(key, self.decls.len());
            self.decls.push(decl);
        }
    }

    pub fn get(&self, name: &QualifiedName) -> Option<&TypeDecl> {
        self.index.get(name).map(|&slot| &self.decls[slot])
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl Extend<TypeDecl> for TypeTable {
    fn extend<I: IntoIterator<Item = TypeDecl>>(&mut self, iter: I) {
        for decl in iter {
            self.insert(decl);
        }
    }
}

impl FromIterator<TypeDecl> for TypeTable {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        let mut table = TypeTable::new();
        table.extend(iter);
        table
    }
}

impl TypeHost for TypeTable {
    fn lookup(&self, name: &QualifiedName) -> Option<&TypeDecl> {
        self.get(name)
    }
}
