//! Strategies shared by the property tests

use proptest::prelude::*;

fn join(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// A tag group such as `-rc2.1`, `_beta` or `-4.5`.
fn group() -> impl Strategy<Value = String> {
    let tag = prop::sample::select(vec!["alpha", "beta", "pre", "rc", "r", "p", ""]);
    let dash = prop::sample::select(vec!["-", "_"]);
    (dash, tag, prop::collection::vec(0u32..50, 0..=4)).prop_map(|(dash, tag, numbers)| {
        if tag.is_empty() && numbers.is_empty() {
            format!("{dash}0")
        } else {
            format!("{dash}{tag}{}", join(&numbers))
        }
    })
}

/// Valid version text covering columns, both tag groups and build suffixes.
pub fn version_text() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(prop_oneof![0u32..20, 0u32..1_000_000], 1..=4),
        prop::option::of(group()),
        prop::option::of(group()),
        prop::option::of(1u32..1_000_000),
    )
        .prop_map(|(v, columns, release, specifier, build)| {
            let mut text = String::new();
            if v {
                text.push('v');
            }
            text.push_str(&join(&columns));
            for g in [release, specifier].into_iter().flatten() {
                text.push_str(&g);
            }
            if let Some(build) = build {
                text.push_str(&format!("+build{build}"));
            }
            text
        })
}
