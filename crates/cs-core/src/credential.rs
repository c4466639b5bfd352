//! Password encode/verify codec.
//!
//! The stored representation is base64 over the password plus a fixed salt
//! constant. It is deterministic and trivially reversible, so it is NOT a
//! password hash: it only keeps plaintext out of casual view of the users
//! bucket. A deployment that needs real credential security must swap a KDF
//! in behind these same two functions.

use base64::Engine;

const SALT: &str = "salt";

/// Stored representation of a plaintext password.
///
/// Total and pure: every input, the empty string included, encodes to the
/// same output on every call.
pub fn encode(password: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(format!("{password}{SALT}"))
}

/// True iff `password` encodes to `credential`.
pub fn verify(password: &str, credential: &str) -> bool {
    encode(password) == credential
}
