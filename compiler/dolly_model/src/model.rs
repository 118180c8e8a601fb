//! The classified description of one type.

use std::fmt;

use crate::{MemberFlags, ModelFlags};

/// A member to copy.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Member {
    pub name: String,
    /// Can only be set through a constructor.
    pub readonly: bool,
    pub flags: MemberFlags,
}

impl Member {
    pub fn new(name: impl Into<String>, readonly: bool, flags: MemberFlags) -> Self {
        Member {
            name: name.into(),
            readonly,
            flags,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.flags)
    }
}

/// Everything the synthesizer needs to emit clone methods for one type.
///
/// `members` and `constructor_members` partition the collected members:
/// `constructor_members` are passed to the constructor in parameter order,
/// `members` are assigned in an object initializer in collection order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Model {
    pub namespace: String,
    pub name: String,
    /// The module the support types are generated into.
    pub module: String,
    pub flags: ModelFlags,
    pub members: Vec<Member>,
    pub constructor_members: Vec<Member>,
}

impl Model {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        module: impl Into<String>,
        flags: ModelFlags,
    ) -> Self {
        Model {
            namespace: namespace.into(),
            name: name.into(),
            module: module.into(),
            flags,
            members: Vec::new(),
            constructor_members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    #[must_use]
    pub fn with_constructor_members(mut self, members: Vec<Member>) -> Self {
        self.constructor_members = members;
        self
    }

    /// `Namespace.Name`.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}
