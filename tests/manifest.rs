//! Package metadata and feature layout.

const MANIFEST: &str = include_str!("../Cargo.toml");

fn line_starting(prefix: &str) -> Option<&'static str> {
    MANIFEST.lines().find(|line| line.trim_start().starts_with(prefix))
}

#[test]
fn test_license_declared() {
    assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT OR Apache-2.0");
    assert!(env!("CARGO_PKG_REPOSITORY").is_empty());
}

#[test]
fn test_subscriber_only_behind_cli_feature() {
    let dependency = line_starting("tracing-subscriber").unwrap();
    assert!(dependency.contains("optional = true"), "{}", dependency);
    assert_eq!(
        line_starting("cli =").unwrap().trim(),
        r#"cli = ["dep:tracing-subscriber"]"#
    );
    assert_eq!(
        line_starting("required-features").unwrap().trim(),
        r#"required-features = ["cli"]"#
    );
}
