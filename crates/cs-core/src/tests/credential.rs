use crate::credential;

#[test]
fn test_encode_is_deterministic() {
    assert_eq!(credential::encode("hunter2"), credential::encode("hunter2"));
    assert_ne!(credential::encode("hunter2"), credential::encode("hunter3"));
}

#[test]
fn test_encode_known_vector() {
    // base64("hunter2" + "salt")
    assert_eq!(credential::encode("hunter2"), "aHVudGVyMnNhbHQ=");
}

#[test]
fn test_verify_accepts_correct_password() {
    let stored = credential::encode("correct horse");
    assert!(credential::verify("correct horse", &stored));
}

#[test]
fn test_verify_rejects_wrong_password() {
    let stored = credential::encode("correct horse");
    assert!(!credential::verify("wrong horse", &stored));
    assert!(!credential::verify("", &stored));
}

#[test]
fn test_empty_password_still_encodes() {
    let stored = credential::encode("");
    assert_eq!(stored, "c2FsdA==");
    assert!(credential::verify("", &stored));
}
