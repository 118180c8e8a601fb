//! The type query surface consumed by the model builder.
//!
//! A `TypeDescriptor` is a declaration viewed through a particular
//! instantiation: `List<SimpleClass>` is the `List<T>` declaration with
//! `T := SimpleClass`, and every type it reports (members, constructor
//! parameters, base, interfaces) has that substitution applied.

use rustc_hash::FxHashSet;

use crate::well_known::{
    support_namespace, CLONABLE_ATTRIBUTE, CLONABLE_INTERFACE, COLLECTIONS_GENERIC, ENUMERABLE,
};
use crate::{
    ConstructorDecl, MemberDecl, Parameter, QualifiedName, Substitution, TypeDecl, TypeHost,
    TypeKind, TypeRef,
};

/// A declared type, possibly instantiated with type arguments.
#[derive(Clone)]
pub struct TypeDescriptor<'h> {
    host: &'h dyn TypeHost,
    decl: &'h TypeDecl,
    subst: Substitution,
}

impl<'h> TypeDescriptor<'h> {
    /// View a declaration with its generic parameters unbound.
    pub fn new(host: &'h dyn TypeHost, decl: &'h TypeDecl) -> Self {
        TypeDescriptor {
            host,
            decl,
            subst: Substitution::default(),
        }
    }

    /// Resolve a type use. `None` for arrays, generic parameters and names
    /// the host does not know.
    pub fn of(host: &'h dyn TypeHost, ty: &TypeRef) -> Option<Self> {
        let decl = host.resolve(ty)?;
        Some(TypeDescriptor {
            host,
            decl,
            subst: Substitution::new(&decl.generics, ty.type_args()),
        })
    }

    pub fn host(&self) -> &'h dyn TypeHost {
        self.host
    }

    pub fn namespace(&self) -> &'h str {
        &self.decl.namespace
    }

    pub fn name(&self) -> &'h str {
        &self.decl.name
    }

    pub fn qualified_name(&self) -> QualifiedName {
        self.decl.qualified_name()
    }

    /// This type as a type use, with the instantiation applied.
    pub fn type_ref(&self) -> TypeRef {
        self.decl.self_ref().substitute(&self.subst)
    }

    /// Fully-qualified name including type arguments.
    pub fn full_name(&self) -> String {
        self.type_ref().full_name()
    }

    pub fn is_abstract(&self) -> bool {
        self.decl.kind.contains(TypeKind::ABSTRACT)
    }

    pub fn is_value_type(&self) -> bool {
        self.decl.kind.contains(TypeKind::VALUE_TYPE)
    }

    pub fn is_record(&self) -> bool {
        self.decl.kind.contains(TypeKind::RECORD)
    }

    /// Sealed as the host reports it: value types cannot be derived from,
    /// so they are always sealed.
    pub fn is_sealed(&self) -> bool {
        self.decl
            .kind
            .intersects(TypeKind::SEALED | TypeKind::VALUE_TYPE)
    }

    /// Apply this instantiation to a type mentioned by the declaration.
    pub fn substitute(&self, ty: &TypeRef) -> TypeRef {
        if self.subst.is_empty() {
            ty.clone()
        } else {
            ty.substitute(&self.subst)
        }
    }

    /// The direct base type, if the host knows it.
    pub fn base(&self) -> Option<TypeDescriptor<'h>> {
        let base = self.decl.base.as_ref()?;
        TypeDescriptor::of(self.host, &self.substitute(base))
    }

    /// This type followed by each resolvable ancestor, nearest first.
    ///
    /// The walk stops at the first unresolvable base and never revisits a
    /// declaration, so a malformed host cannot make it loop.
    pub fn base_chain(&self) -> Vec<TypeDescriptor<'h>> {
        let mut chain = vec![self.clone()];
        let mut seen = FxHashSet::default();
        seen.insert(self.qualified_name());
        while let Some(next) = chain.last().and_then(TypeDescriptor::base) {
            if !seen.insert(next.qualified_name()) {
                break;
            }
            chain.push(next);
        }
        chain
    }

    /// Members declared on this type (not inherited), with their types
    /// instantiated.
    pub fn own_members(&self) -> impl Iterator<Item = (&'h MemberDecl, TypeRef)> + '_ {
        self.decl
            .members
            .iter()
            .map(move |member| (member, self.substitute(&member.ty)))
    }

    /// Declared constructors with instantiated parameter types.
    pub fn constructors(&self) -> Vec<ConstructorDecl> {
        self.decl
            .constructors
            .iter()
            .map(|ctor| {
                ConstructorDecl::new(
                    ctor.params
                        .iter()
                        .map(|p| Parameter::new(p.name.clone(), self.substitute(&p.ty)))
                        .collect(),
                )
            })
            .collect()
    }

    pub fn has_attribute(&self, namespace: &str, name: &str) -> bool {
        self.decl.has_attribute(namespace, name)
    }

    /// Every interface this type implements: declared ones, the interfaces
    /// they extend, and those inherited from base types.
    ///
    /// Order is deterministic (breadth-first, own before inherited) and each
    /// interface appears once.
    pub fn all_interfaces(&self) -> Vec<TypeRef> {
        let mut found: Vec<TypeRef> = Vec::new();
        let mut expanded: FxHashSet<QualifiedName> = FxHashSet::default();
        let mut queue: Vec<TypeRef> = Vec::new();

        for ty in self.base_chain() {
            queue.extend(ty.decl.interfaces.iter().map(|i| ty.substitute(i)));
        }

        let mut cursor = 0;
        while cursor < queue.len() {
            let interface = queue[cursor].without_annotation();
            cursor += 1;
            if found.iter().any(|f| f.same_type(&interface)) {
                continue;
            }
            if let Some(view) = TypeDescriptor::of(self.host, &interface) {
                if expanded.insert(view.qualified_name()) {
                    queue.extend(view.decl.interfaces.iter().map(|i| view.substitute(i)));
                }
            }
            found.push(interface);
        }
        found
    }

    /// Whether this type is recognized as clonable by `module`.
    ///
    /// Either it carries `<module>.Dolly.ClonableAttribute`, or it already
    /// implements an interface named `IClonable` (from any module).
    pub fn is_clonable(&self, module: &str) -> bool {
        self.has_attribute(&support_namespace(module), CLONABLE_ATTRIBUTE)
            || self.all_interfaces().iter().any(|i| {
                matches!(i, TypeRef::Named { name, .. } if name == CLONABLE_INTERFACE)
            })
    }

    /// The `T` of the single `IEnumerable<T>` this type is or implements.
    ///
    /// Types implementing the sequence interface for several element types
    /// are ambiguous and report `None`.
    pub fn sequence_element(&self) -> Option<TypeRef> {
        let this = self.type_ref();
        if this.is_named(COLLECTIONS_GENERIC, ENUMERABLE, 1) {
            return this.type_args().first().cloned();
        }
        let mut sequences = self
            .all_interfaces()
            .into_iter()
            .filter(|i| i.is_named(COLLECTIONS_GENERIC, ENUMERABLE, 1));
        let only = sequences.next()?;
        if sequences.next().is_some() {
            return None;
        }
        only.type_args().first().cloned()
    }
}

impl std::fmt::Debug for TypeDescriptor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypeDescriptor")
            .field(&self.full_name())
            .finish()
    }
}
