//! Per-member copy expressions.

use dolly_model::Member;

/// Which clone method an expression is rendered for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CloneDepth {
    /// `DeepClone()`: clonable values are cloned recursively.
    Deep,
    /// `ShallowClone()`: clonable values are shared, collections are still
    /// copied.
    Shallow,
}

impl CloneDepth {
    pub fn is_deep(self) -> bool {
        self == CloneDepth::Deep
    }
}

/// The projection cloning each element of a sequence.
fn clone_each(element_nullable: bool) -> &'static str {
    if element_nullable {
        "Select(item => item?.DeepClone())"
    } else {
        "Select(item => item.DeepClone())"
    }
}

/// Render the expression producing the copy of `member`.
///
/// `NewCollection` members are rebuilt through their sequence constructor
/// (`new (...)`); other sequences become arrays (`.ToArray()`); clonable
/// values call `.DeepClone()` only for [`CloneDepth::Deep`]. Anything else is
/// the member itself.
///
/// A `NewCollection` member is rendered as a collection even without
/// `Enumerable`.
pub fn render_expression(member: &Member, depth: CloneDepth) -> String {
    let flags = member.flags;
    let name = member.name.as_str();
    let clone_elements = depth.is_deep() && flags.clonable;

    if flags.new_collection {
        let guard = if flags.member_nullable {
            format!("{name} == null ? null : ")
        } else {
            String::new()
        };
        let inner = if clone_elements {
            format!("{name}.{}", clone_each(flags.element_nullable))
        } else {
            name.to_string()
        };
        return format!("{guard}new ({inner})");
    }

    let mut out = String::from(name);
    if flags.member_nullable && (flags.enumerable || clone_elements) {
        out.push('?');
    }
    if flags.enumerable {
        if clone_elements {
            out.push('.');
            out.push_str(clone_each(flags.element_nullable));
        }
        out.push_str(".ToArray()");
    } else if clone_elements {
        out.push_str(".DeepClone()");
    }
    out
}
