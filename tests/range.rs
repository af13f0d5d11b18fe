use rstest::rstest;
use semverx::{Range, Version, VersionError, satisfies};

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[rstest]
#[case("1.2.3", "^1.2.0", true)]
#[case("2.0.0", "^1.2.0", false)]
#[case("1.5.0", "~1.2.0", false)]
#[case("1.2.7", "~1.2.0", true)]
#[case("0.2.9", "^0.2.3", true)]
#[case("0.3.0", "^0.2.3", false)]
#[case("0.5.0", "^v0.2.3", true)]
#[case("1.2.5-beta", "1.2.3 - 1.2.9", false)]
#[case("1.2.5", "1.2.3 - 1.2.9", true)]
#[case("1.2.5-beta", "1.2.5-alpha - 1.2.9", true)]
#[case("1.5.0", ">=1.0.0 <2.0.0", true)]
#[case("2.0.0", ">=1.0.0 <2.0.0", false)]
#[case("2.0.0-rc1", ">=1.0.0 <2.0.0", false)]
#[case("2.0.0", ">1.0.0,<=2.0.0", true)]
#[case("1.9.9", "1.x", true)]
#[case("2.0.0", "1.x", false)]
#[case("1.2.9", "1.2.*", true)]
#[case("1.3.0", "1.2.*", false)]
#[case("1.9.0", "1", true)]
#[case("1.2.4", "1.2", true)]
#[case("1.3.0", "1.2", false)]
#[case("999.0.0", "*", true)]
#[case("0.0.1", "", true)]
#[case("1.0.0-beta", "*", false)]
#[case("1.0.0_pre20140722+build15", ">=1.0.0_pre20140722", true)]
fn satisfies_returns_expected(#[case] version: &str, #[case] range: &str, #[case] expected: bool) {
    assert_eq!(satisfies(version, range), Ok(expected));
}

#[rstest]
#[case("1.8-gazilla", "^1.0.0", VersionError::InvalidVersionString)]
#[case("1.0.0", "^1.0.0.0.1", VersionError::TooManyColumns)]
#[case("1.0.0", ">=", VersionError::InvalidVersionString)]
#[case("1.0.0", ">=1.0+build", VersionError::InvalidBuildSuffix)]
fn satisfies_surfaces_version_errors(
    #[case] version: &str,
    #[case] range: &str,
    #[case] expected: VersionError,
) {
    assert_eq!(satisfies(version, range), Err(expected));
}

#[test]
fn shorthand_bounds_match_documented_expansion() {
    let caret = Range::parse("^1.2.3").unwrap();
    assert_eq!(caret.lower(), Some(&v("1.2.3")));
    assert_eq!(caret.upper(), Some(&v("2.0.0")));
    assert!(caret.is_lower_inclusive());
    assert!(!caret.is_upper_inclusive());

    let tilde: Range = "~1.2.3".parse().unwrap();
    assert_eq!(tilde.upper(), Some(&v("1.3.0")));

    let zero_major = Range::parse("^0.2.3").unwrap();
    assert_eq!(zero_major.upper(), Some(&v("0.3.0")));
}

#[test]
fn contains_accepts_what_is_satisfied_by_rejects() {
    let range = Range::parse("1.2.3 - 1.2.9").unwrap();
    let pre = v("1.2.5-beta");

    assert!(range.contains(&pre));
    assert!(!range.is_satisfied_by(&pre));
}

#[test]
fn ranges_are_shareable_across_threads() {
    let range = Range::parse("^1.0.0").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|minor| std::thread::spawn(move || range.is_satisfied_by(&v(&format!("1.{minor}.0")))))
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
