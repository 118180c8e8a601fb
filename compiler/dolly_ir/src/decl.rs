//! Type declarations.
//!
//! A `TypeDecl` is one declared type as the host reports it: its kind, its
//! generic parameters, its direct base type, the interfaces it declares, its
//! attributes, and the members and constructors declared *on it* (inherited
//! members live on the base declaration).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{QualifiedName, TypeRef};

bitflags! {
    /// Kind flags of a declared type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TypeKind: u8 {
        /// Declared as a record (`record` / `record struct`).
        const RECORD = 1 << 0;
        /// A value type (`struct`, primitives, `Nullable<T>`).
        const VALUE_TYPE = 1 << 1;
        /// Explicitly sealed.
        const SEALED = 1 << 2;
        /// Abstract; cannot be instantiated.
        const ABSTRACT = 1 << 3;
        /// An interface declaration.
        const INTERFACE = 1 << 4;
    }
}

/// Where a member came from on its declaring type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberOrigin {
    Property,
    Field,
}

/// A property or field declared on a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub origin: MemberOrigin,
    /// A property without a setter, or a `readonly` field.
    ///
    /// Init-only setters are setters.
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "const")]
    pub is_const: bool,
    /// Compiler-synthesized (backing fields, `EqualityContract`, ...).
    #[serde(default)]
    pub implicit: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<QualifiedName>,
}

impl MemberDecl {
    /// A settable instance property.
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        MemberDecl::new(name, ty, MemberOrigin::Property)
    }

    /// A mutable instance field.
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        MemberDecl::new(name, ty, MemberOrigin::Field)
    }

    fn new(name: impl Into<String>, ty: TypeRef, origin: MemberOrigin) -> Self {
        MemberDecl {
            name: name.into(),
            ty,
            origin,
            readonly: false,
            is_static: false,
            is_const: false,
            implicit: false,
            attributes: Vec::new(),
        }
    }

    /// Mark as readonly (getter-only property or readonly field).
    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Mark as static.
    #[must_use]
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as a constant field.
    #[must_use]
    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Mark as compiler-synthesized.
    #[must_use]
    pub fn implicit(mut self) -> Self {
        self.implicit = true;
        self
    }

    /// Attach an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: QualifiedName) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn is_field(&self) -> bool {
        self.origin == MemberOrigin::Field
    }

    /// Whether an attribute with this namespace and name is attached.
    pub fn has_attribute(&self, namespace: &str, name: &str) -> bool {
        self.attributes.iter().any(|a| a.is(namespace, name))
    }
}

/// A constructor parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }
}

/// A declared constructor (parameters in declaration order).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub params: Vec<Parameter>,
}

impl ConstructorDecl {
    /// The parameterless constructor.
    pub fn parameterless() -> Self {
        ConstructorDecl::default()
    }

    pub fn new(params: Vec<Parameter>) -> Self {
        ConstructorDecl { params }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

fn default_constructors() -> Vec<ConstructorDecl> {
    vec![ConstructorDecl::parameterless()]
}

/// A declared type.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct TypeDecl {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    /// Generic parameter names, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<String>,
    #[serde(default)]
    pub kind: TypeKind,
    /// Direct base type. `None` for `System.Object`, interfaces and value types.
    #[serde(default)]
    pub base: Option<TypeRef>,
    /// Directly declared interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<QualifiedName>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
    /// Declared constructors. Omitted in input means the implicit
    /// parameterless constructor.
    #[serde(default = "default_constructors")]
    pub constructors: Vec<ConstructorDecl>,
}

impl TypeDecl {
    /// A non-generic class with the implicit parameterless constructor.
    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDecl {
            namespace: namespace.into(),
            name: name.into(),
            generics: Vec::new(),
            kind: TypeKind::empty(),
            base: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            members: Vec::new(),
            constructors: default_constructors(),
        }
    }

    /// A struct with the implicit parameterless constructor.
    pub fn structure(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDecl::class(namespace, name).with_kind(TypeKind::VALUE_TYPE)
    }

    /// An interface (no constructors).
    pub fn interface(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDecl {
            constructors: Vec::new(),
            ..TypeDecl::class(namespace, name).with_kind(TypeKind::INTERFACE)
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind |= kind;
        self
    }

    #[must_use]
    pub fn with_generics<I, S>(mut self, generics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generics = generics.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    #[must_use]
    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: QualifiedName) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: MemberDecl) -> Self {
        self.members.push(member);
        self
    }

    /// Replace the declared constructors.
    #[must_use]
    pub fn with_constructors(mut self, constructors: Vec<ConstructorDecl>) -> Self {
        self.constructors = constructors;
        self
    }

    /// Add a constructor after the existing ones.
    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.namespace.clone(), self.name.clone())
    }

    /// A use of this declaration with its own generic parameters as arguments.
    pub fn self_ref(&self) -> TypeRef {
        TypeRef::generic(
            self.namespace.clone(),
            self.name.clone(),
            self.generics.iter().map(TypeRef::param).collect(),
        )
    }

    /// Whether an attribute with this namespace and name is attached.
    pub fn has_attribute(&self, namespace: &str, name: &str) -> bool {
        self.attributes.iter().any(|a| a.is(namespace, name))
    }
}
