//! Declaration and method modifiers.

use dolly_model::ModelFlags;

/// Keywords of the partial re-declaration: `partial` followed by `record`,
/// `struct`, both, or `class`.
///
/// Sealed-ness is never restated; it is taken from the original declaration.
pub fn type_modifiers(flags: ModelFlags) -> String {
    let mut out = String::from("partial");
    if flags.record {
        out.push_str(" record");
    }
    if flags.structure {
        out.push_str(" struct");
    }
    if !flags.record && !flags.structure {
        out.push_str(" class");
    }
    out
}

/// Modifier placed before the return type of both clone methods, including
/// its trailing space.
pub fn method_modifiers(flags: ModelFlags) -> &'static str {
    if flags.clonable_base {
        "override "
    } else if !flags.structure && !flags.sealed {
        "virtual "
    } else {
        ""
    }
}
