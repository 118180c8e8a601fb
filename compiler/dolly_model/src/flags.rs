//! Classification facts for members and models.
//!
//! These are plain boolean records rather than bit sets. Every combination is
//! representable, including ones the builder never produces (a `Struct` with
//! a clonable base, `NewCollection` without `Enumerable`), and downstream
//! code must accept all of them.

use std::fmt;

/// How a member's value is duplicated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct MemberFlags {
    /// The value (or, for sequences, each element) has clone methods.
    pub clonable: bool,
    /// A sequence; cloned into a fresh array unless `new_collection`.
    pub enumerable: bool,
    /// A concrete collection rebuilt through its sequence constructor.
    pub new_collection: bool,
    /// The member itself may be null.
    pub member_nullable: bool,
    /// Elements of the sequence may be null.
    pub element_nullable: bool,
}

impl MemberFlags {
    /// No flags set: copied by plain assignment.
    pub const NONE: MemberFlags = MemberFlags {
        clonable: false,
        enumerable: false,
        new_collection: false,
        member_nullable: false,
        element_nullable: false,
    };

    fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (self.clonable, "Clonable"),
            (self.enumerable, "Enumerable"),
            (self.new_collection, "NewCollection"),
            (self.member_nullable, "MemberNullable"),
            (self.element_nullable, "ElementNullable"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

/// Type-level facts that select declaration and method modifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ModelFlags {
    pub record: bool,
    /// A value type.
    pub structure: bool,
    /// Some strict ancestor already has clone methods.
    pub clonable_base: bool,
    pub sealed: bool,
}

impl ModelFlags {
    pub const NONE: ModelFlags = ModelFlags {
        record: false,
        structure: false,
        clonable_base: false,
        sealed: false,
    };

    fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (self.record, "Record"),
            (self.structure, "Struct"),
            (self.clonable_base, "ClonableBase"),
            (self.sealed, "Sealed"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

fn write_names<'a>(
    f: &mut fmt::Formatter<'_>,
    mut names: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    let Some(first) = names.next() else {
        return write!(f, "None");
    };
    write!(f, "{first}")?;
    for name in names {
        write!(f, " | {name}")?;
    }
    Ok(())
}

impl fmt::Display for MemberFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names(f, self.names())
    }
}

impl fmt::Display for ModelFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names(f, self.names())
    }
}
