#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(graphkit::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!graphkit::VERSION.is_empty());
}
