use super::*;

fn v(text: &str) -> RobotVersion {
    match text.parse() {
        Ok(version) => version,
        Err(e) => panic!("{text}: {e}"),
    }
}

#[test]
fn test_parse_two_and_three_components() {
    assert_eq!(v("3.0"), RobotVersion::new(3, 0));
    assert_eq!(v("3.0.9"), RobotVersion::with_patch(3, 0, 9));
    assert_eq!(v(" 3.2 "), RobotVersion::V3_2);
    assert_eq!(v("3.1rc1"), RobotVersion::V3_1);
}

#[test]
fn test_missing_patch_equals_zero_patch() {
    assert_eq!(v("3.1"), v("3.1.0"));
    assert!(!v("3.1").is_older_than(v("3.1.0")));
}

#[test]
fn test_ordering_helpers() {
    assert!(v("3.0.9").is_older_than(RobotVersion::V3_1));
    assert!(v("3.1.5").is_newer_or_equal_to(RobotVersion::V3_1));
    assert!(v("3.2").is_newer_than(v("3.1.5")));
    assert!(v("2.9").is_older_than_or_equal_to(RobotVersion::V2_9));
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<RobotVersion>(), Err(VersionParseError::Empty));
    assert_eq!(
        "3.x".parse::<RobotVersion>(),
        Err(VersionParseError::InvalidComponent("x".to_string()))
    );
    assert_eq!(
        "1.2.3.4".parse::<RobotVersion>(),
        Err(VersionParseError::TooManyComponents(4))
    );
}

#[test]
fn test_display_keeps_patch_presence() {
    assert_eq!(v("3.1").to_string(), "3.1");
    assert_eq!(v("3.1.5").to_string(), "3.1.5");
}
