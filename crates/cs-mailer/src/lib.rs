pub mod config;
pub mod dispatch;
pub mod mailer;
pub mod token;

pub use config::{MailerConfig, PLACEHOLDER_PUBLIC_KEY};
pub use dispatch::{DispatchOutcome, DispatchResult, RenderedMail};
pub use mailer::Mailer;
pub use token::{generate_reset_token, generate_verification_code};

#[cfg(test)]
mod tests;
