//! Reset-token and verification-code generators.

use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};

const RESET_TOKEN_LEN: usize = 24;

/// One-time password-reset token embedded in the reset link.
///
/// Opaque random string; nothing in this subsystem tracks or expires it.
pub fn generate_reset_token() -> String {
    Alphanumeric
        .sample_string(&mut rand::rng(), RESET_TOKEN_LEN)
        .to_lowercase()
}

/// Six-digit verification code, uniform in [100000, 999999].
pub fn generate_verification_code() -> u32 {
    rand::rng().random_range(100_000..=999_999)
}
