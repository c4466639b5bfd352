use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Guest.as_str(), "guest");
    assert_eq!(UserRole::Host.as_str(), "host");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("guest").unwrap(), UserRole::Guest);
    assert_eq!(UserRole::from_str("host").unwrap(), UserRole::Host);
    assert!(UserRole::from_str("admin").is_err());
}

#[test]
fn test_user_role_default() {
    assert_eq!(UserRole::default(), UserRole::Guest);
}
