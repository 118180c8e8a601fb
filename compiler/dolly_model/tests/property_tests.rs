//! Property-based tests for the model builder.
//!
//! Random classes are generated with a mix of settable and readonly members
//! and a constructor taking exactly the readonly ones, then checked for:
//! 1. Determinism: building twice gives the same model
//! 2. Partition: every collected member ends up in exactly one list
//! 3. Binding: constructor members follow parameter order and are the readonly ones

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use dolly_ir::{ConstructorDecl, MemberDecl, Parameter, TypeDecl, TypeDescriptor, TypeRef, TypeTable};
use dolly_model::{build, Model, Nullability};
use proptest::prelude::*;

const MODULE: &str = "Dolly.Tests";

// -- Strategies --

/// Distinct lowercase member stems, each paired with a readonly flag and
/// whether it is declared as a field.
fn members_strategy() -> impl Strategy<Value = Vec<(String, bool, bool)>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..8).prop_flat_map(|stems| {
        let len = stems.len();
        (
            Just(stems.into_iter().collect::<Vec<_>>()),
            prop::collection::vec(any::<bool>(), len),
            prop::collection::vec(any::<bool>(), len),
        )
            .prop_map(|(stems, readonly, field)| {
                stems
                    .into_iter()
                    .zip(readonly)
                    .zip(field)
                    .map(|((stem, readonly), field)| (stem, readonly, field))
                    .collect()
            })
    })
}

fn capitalize(stem: &str) -> String {
    let mut chars = stem.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// A class whose members come from `layout` and whose constructors are the
/// parameterless one plus one taking every readonly member, in reverse
/// declaration order.
fn class_with(layout: &[(String, bool, bool)]) -> TypeTable {
    let string = TypeRef::named("System", "String");
    let mut decl = TypeDecl::class("Dolly", "Generated");
    for (stem, readonly, field) in layout {
        let member = if *field {
            MemberDecl::field(stem.clone(), string.clone())
        } else {
            MemberDecl::property(capitalize(stem), string.clone())
        };
        decl = decl.with_member(if *readonly { member.readonly() } else { member });
    }
    let params = layout
        .iter()
        .rev()
        .filter(|(_, readonly, _)| *readonly)
        .map(|(stem, _, _)| Parameter::new(stem.clone(), string.clone()))
        .collect();
    decl = decl.with_constructor(ConstructorDecl::new(params));

    let mut table = TypeTable::with_prelude();
    table.insert(decl);
    table
}

fn build_generated(table: &TypeTable) -> Model {
    let view = TypeDescriptor::of(table, &TypeRef::named("Dolly", "Generated"))
        .expect("generated class is declared");
    build(&view, Nullability::Tracked, MODULE).expect("generated class has a usable constructor")
}

fn names(model_members: &[dolly_model::Member]) -> Vec<String> {
    model_members.iter().map(|m| m.name.to_lowercase()).collect()
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn build_is_deterministic(layout in members_strategy()) {
        let table = class_with(&layout);
        prop_assert_eq!(build_generated(&table), build_generated(&table));
    }

    #[test]
    fn members_are_partitioned(layout in members_strategy()) {
        let model = build_generated(&class_with(&layout));

        let mut all = names(&model.members);
        all.extend(names(&model.constructor_members));
        all.sort();
        let mut expected: Vec<String> = layout.iter().map(|(stem, _, _)| stem.clone()).collect();
        expected.sort();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn constructor_binds_readonly_members_in_parameter_order(layout in members_strategy()) {
        let model = build_generated(&class_with(&layout));

        let expected: Vec<String> = layout
            .iter()
            .rev()
            .filter(|(_, readonly, _)| *readonly)
            .map(|(stem, _, _)| stem.clone())
            .collect();
        prop_assert_eq!(names(&model.constructor_members), expected);
        prop_assert!(model.constructor_members.iter().all(|m| m.readonly));
        prop_assert!(model.members.iter().all(|m| !m.readonly));
    }
}
