//! Model construction.

use dolly_ir::well_known::{support_namespace, CLONE_IGNORE_ATTRIBUTE};
use dolly_ir::{MemberDecl, MemberOrigin, TypeDescriptor};

use crate::constructor::{partition, select};
use crate::{classify, ClassificationError, Member, Model, ModelFlags, Nullability};

/// Whether a declared member takes part in cloning.
fn is_cloned(member: &MemberDecl, ignore_namespace: &str) -> bool {
    !member.implicit
        && !member.is_static
        && !(member.is_field() && member.is_const)
        && !member.has_attribute(ignore_namespace, CLONE_IGNORE_ATTRIBUTE)
}

/// Collect the members to clone across the whole base chain.
///
/// All properties come first (own, then each ancestor's), then all fields in
/// the same chain order.
fn collect_members(
    ty: &TypeDescriptor<'_>,
    nullability: Nullability,
    module: &str,
) -> Vec<Member> {
    let chain = ty.base_chain();
    let ignore_namespace = support_namespace(module);
    let host = ty.host();

    [MemberOrigin::Property, MemberOrigin::Field]
        .into_iter()
        .flat_map(|origin| {
            chain
                .iter()
                .flat_map(|ty| ty.own_members())
                .filter(move |(decl, _)| decl.origin == origin)
                .collect::<Vec<_>>()
        })
        .filter(|(decl, _)| is_cloned(decl, &ignore_namespace))
        .map(|(decl, member_ty)| {
            Member::new(
                decl.name.clone(),
                decl.readonly,
                classify(host, &member_ty, nullability, module),
            )
        })
        .collect()
}

/// Build the clone model for `ty`.
///
/// `module` names where the support types live (`<module>.Dolly`); it
/// decides which attributes count as the clonability and ignore markers.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %ty.full_name()))]
pub fn build(
    ty: &TypeDescriptor<'_>,
    nullability: Nullability,
    module: &str,
) -> Result<Model, ClassificationError> {
    if ty.is_abstract() {
        return Err(ClassificationError::AbstractType {
            type_name: ty.full_name(),
        });
    }

    let members = collect_members(ty, nullability, module);
    let constructors = ty.constructors();
    let Some(constructor) = select(&constructors, &members) else {
        tracing::debug!(
            members = members.len(),
            constructors = constructors.len(),
            "no usable constructor"
        );
        return Err(ClassificationError::NoValidConstructor {
            type_name: ty.full_name(),
            required: members
                .iter()
                .filter(|m| m.readonly)
                .map(|m| m.name.clone())
                .collect(),
            members: members.iter().map(|m| m.name.clone()).collect(),
        });
    };
    tracing::debug!(
        members = members.len(),
        arity = constructor.arity(),
        "selected constructor"
    );

    let (members, constructor_members) = partition(constructor, members);

    let flags = ModelFlags {
        record: ty.is_record(),
        structure: ty.is_value_type(),
        clonable_base: ty
            .base_chain()
            .iter()
            .skip(1)
            .any(|ancestor| ancestor.is_clonable(module)),
        sealed: ty.is_sealed(),
    };

    Ok(Model::new(ty.namespace(), ty.name(), module, flags)
        .with_members(members)
        .with_constructor_members(constructor_members))
}

#[cfg(test)]
mod tests;
