use crate::{User, UserRole, credential};

fn test_user() -> User {
    User::new(
        "Dana".to_string(),
        "Dana@Example.com".to_string(),
        credential::encode("pw"),
        UserRole::Host,
    )
}

#[test]
fn test_new_user_defaults() {
    let user = test_user();
    assert!(!user.is_verified);
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(user.role, UserRole::Host);
}

#[test]
fn test_new_lowercases_email() {
    let user = test_user();
    assert_eq!(user.email, "dana@example.com");
}

#[test]
fn test_profile_strips_nothing_but_credential() {
    let user = test_user();
    let profile = user.profile();
    assert_eq!(profile.id, user.id);
    assert_eq!(profile.name, user.name);
    assert_eq!(profile.email, user.email);
    assert_eq!(profile.role, user.role);
    assert_eq!(profile.is_verified, user.is_verified);
    assert_eq!(profile.created_at, user.created_at);
    assert_eq!(profile.updated_at, user.updated_at);
}

#[test]
fn test_distinct_users_get_distinct_ids() {
    assert_ne!(test_user().id, test_user().id);
}
