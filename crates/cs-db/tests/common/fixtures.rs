#![allow(dead_code)]

use cs_core::{NewUser, UserRole};

/// Registration input with the default (guest) role
pub fn new_guest(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "parking123".to_string(),
        role: None,
    }
}

/// Registration input for a spot host
pub fn new_host(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "parking123".to_string(),
        role: Some(UserRole::Host),
    }
}
