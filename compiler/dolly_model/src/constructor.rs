//! Constructor selection.

use dolly_ir::ConstructorDecl;

use crate::Member;

/// Uppercase `c` when it has a single-character uppercase form.
fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Name equality ignoring case, the way parameter names are matched to
/// member names (`onlyCtorCanSet` binds `OnlyCtorCanSet`).
///
/// Characters are compared one to one, so `ß` never matches `SS`.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.chars().map(fold).eq(b.chars().map(fold))
}

/// Pick the constructor the clone methods call.
///
/// A constructor is usable when every parameter names some member and every
/// readonly member is named by some parameter. Among usable constructors the
/// one with the fewest parameters wins; ties go to declaration order.
pub(crate) fn select<'c>(
    constructors: &'c [ConstructorDecl],
    members: &[Member],
) -> Option<&'c ConstructorDecl> {
    let mut by_arity: Vec<&ConstructorDecl> = constructors.iter().collect();
    by_arity.sort_by_key(|ctor| ctor.arity());

    by_arity.into_iter().find(|ctor| {
        let params_are_members = ctor
            .params
            .iter()
            .all(|p| members.iter().any(|m| names_match(&p.name, &m.name)));
        let readonly_are_params = members
            .iter()
            .filter(|m| m.readonly)
            .all(|m| ctor.params.iter().any(|p| names_match(&p.name, &m.name)));
        params_are_members && readonly_are_params
    })
}

/// Split `members` into (initializer members, constructor members).
///
/// Each parameter binds the first member whose name matches it and that no
/// earlier parameter bound. Members not bound by any parameter keep their
/// collection order.
pub(crate) fn partition(
    constructor: &ConstructorDecl,
    members: Vec<Member>,
) -> (Vec<Member>, Vec<Member>) {
    let mut bound: Vec<usize> = Vec::with_capacity(constructor.params.len());
    for param in &constructor.params {
        let free = (0..members.len())
            .find(|&i| !bound.contains(&i) && names_match(&param.name, &members[i].name));
        if let Some(i) = free {
            bound.push(i);
        }
    }

    let constructor_members = bound.iter().map(|&i| members[i].clone()).collect();
    let rest = members
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !bound.contains(i))
        .map(|(_, m)| m)
        .collect();
    (rest, constructor_members)
}
