mod common;

use std::cmp::Ordering;

use proptest::prelude::*;
use rstest::rstest;
use semverx::{Version, VersionError, compare};

use common::version_text;

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[rstest]
#[case("1.0.0", "2.0.0")]
#[case("2.2.1", "2.4.0-beta")]
#[case("1.0.0", "1.0.0-p")]
#[case("1.0.0-rc", "1.0.0")]
#[case("1.0.0-pre", "1.0.0-rc")]
#[case("1.0.0-beta", "1.0.0-pre")]
#[case("1.0.0-alpha", "1.0.0-beta")]
#[case("1.0.0+build1", "1.0.0+build2")]
fn documented_orderings_hold(#[case] lower: &str, #[case] higher: &str) {
    assert_eq!(compare(&v(lower), &v(higher)), -1);
    assert_eq!(v(lower).cmp(&v(higher)), Ordering::Less);
}

#[test]
fn gentoo_suffix_order_holds() {
    let ordered = [
        "1.0.0_alpha_pre",
        "1.0.0_alpha_rc1",
        "1.0.0_beta_pre",
        "1.0.0_beta_p1",
        "1.0.0_pre",
        "1.0.0_rc1",
        "1.0.0",
        "1.0.0_p1",
        "1.0.0.1",
    ]
    .map(v);

    assert!(ordered.windows(2).all(|w| w[0] < w[1]));
}

#[rstest]
#[case("1.0.0.0.4", VersionError::TooManyColumns)]
#[case("1..8", VersionError::InvalidVersionString)]
#[case("1.8-gazilla", VersionError::InvalidVersionString)]
#[case("5678.9-", VersionError::InvalidVersionString)]
#[case("1.0+build", VersionError::InvalidBuildSuffix)]
fn malformed_versions_are_rejected(#[case] input: &str, #[case] expected: VersionError) {
    let err = Version::parse(input).unwrap_err();
    assert_eq!(err, expected);
    assert!(err.is_invalid());
}

#[test]
fn accessors_read_numeric_core() {
    let version = v("1.2.3");
    assert_eq!((version.major(), version.minor(), version.patch()), (1, 2, 3));
}

proptest! {
    #[test]
    fn generated_text_parses(text in version_text()) {
        prop_assert!(Version::parse(&text).is_ok(), "{} failed to parse", text);
    }

    #[test]
    fn compare_is_antisymmetric(a in version_text(), b in version_text()) {
        let (a, b) = (v(&a), v(&b));
        prop_assert_eq!(compare(&a, &b), -compare(&b, &a));
        prop_assert_eq!(compare(&a, &a), 0);
        prop_assert_eq!(a.less(&b), compare(&a, &b) < 0);
    }

    #[test]
    fn compare_is_transitive(a in version_text(), b in version_text(), c in version_text()) {
        let (a, b, c) = (v(&a), v(&b), v(&c));
        if compare(&a, &b) <= 0 && compare(&b, &c) <= 0 {
            prop_assert!(compare(&a, &c) <= 0);
        }
        if compare(&a, &b) >= 0 && compare(&b, &c) >= 0 {
            prop_assert!(compare(&a, &c) >= 0);
        }
    }

    #[test]
    fn equal_compare_means_identical(a in version_text(), b in version_text()) {
        let (a, b) = (v(&a), v(&b));
        prop_assert_eq!(compare(&a, &b) == 0, a == b);
    }

    #[test]
    fn display_round_trips(text in version_text()) {
        let version = v(&text);
        let printed = version.to_string();
        prop_assert_eq!(Version::parse(&printed), Ok(version));
    }

    #[test]
    fn limited_equal_ignores_build(text in version_text(), build in 1u32..1000) {
        let version = v(&text);
        let base = text.split('+').next().unwrap_or(&text).to_string();
        let rebuilt = v(&format!("{base}+build{build}"));
        prop_assert!(version.limited_equal(&rebuilt));
    }
}
