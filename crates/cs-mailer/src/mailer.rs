//! Password-reset and verification-code dispatch.

use crate::config::MailerConfig;
use crate::dispatch::{DispatchOutcome, DispatchResult, RenderedMail};
use crate::token::{generate_reset_token, generate_verification_code};

use log::{info, warn};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use url::Url;

const FAILED_MESSAGE: &str = "Failed to send email. Please try again.";

/// Outbound payload for the template-mail API
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: Value,
}

/// Sends account-recovery mail through the template-mail transport, falling
/// back to a local simulation while the transport is unconfigured.
pub struct Mailer {
    config: MailerConfig,
    client: ReqwestClient,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config,
            client: ReqwestClient::new(),
        }
    }

    /// Send a password-reset link to `email`.
    pub async fn send_password_reset(&self, email: &str) -> DispatchResult {
        let reset_link = self.build_reset_link(email);

        if !self.config.is_configured() {
            warn!("Mail transport not configured; simulating password reset email");
            let body = format!(
                "Hello,\n\n\
                 You requested a password reset for your Curbshare account.\n\n\
                 Reset Link: {}\n\n\
                 If you didn't request this, please ignore this email.\n\n\
                 Best regards,\nThe Curbshare Team",
                reset_link
            );
            return self
                .simulate(email, "Password Reset - Curbshare", body, None)
                .await;
        }

        let params = serde_json::json!({
            "email": email,
            "reset_link": reset_link,
            "message": "You requested a password reset for your Curbshare account.",
        });

        match self.post(params).await {
            Ok(()) => DispatchResult {
                outcome: DispatchOutcome::Sent,
                message: "Password reset email sent successfully!".to_string(),
                rendered: None,
                code: None,
            },
            Err(e) => {
                warn!("Password reset dispatch to {} failed: {}", email, e);
                Self::failed()
            }
        }
    }

    /// Send a freshly generated six-digit verification code to `email`.
    pub async fn send_verification_code(&self, email: &str) -> DispatchResult {
        let code = generate_verification_code();

        if !self.config.is_configured() {
            warn!("Mail transport not configured; simulating verification email");
            let body = format!(
                "Hello,\n\n\
                 Thank you for registering with Curbshare!\n\n\
                 Your verification code is: {}\n\n\
                 Please enter this code to complete your registration.\n\n\
                 Best regards,\nThe Curbshare Team",
                code
            );
            return self
                .simulate(email, "Email Verification - Curbshare", body, Some(code))
                .await;
        }

        let params = serde_json::json!({
            "email": email,
            "code": code.to_string(),
            "message": "Please verify your email address to complete your Curbshare registration.",
        });

        match self.post(params).await {
            Ok(()) => DispatchResult {
                outcome: DispatchOutcome::Sent,
                message: "Verification email sent successfully!".to_string(),
                rendered: None,
                code: Some(code),
            },
            Err(e) => {
                warn!("Verification dispatch to {} failed: {}", email, e);
                DispatchResult {
                    code: Some(code),
                    ..Self::failed()
                }
            }
        }
    }

    async fn simulate(
        &self,
        email: &str,
        subject: &str,
        body: String,
        code: Option<u32>,
    ) -> DispatchResult {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }

        let rendered = RenderedMail {
            to: email.to_string(),
            subject: subject.to_string(),
            body,
        };
        info!(
            "Simulated email to {}: {}\n{}",
            rendered.to, rendered.subject, rendered.body
        );

        DispatchResult {
            outcome: DispatchOutcome::Simulated,
            message: format!("Email sent to {}", email),
            rendered: Some(rendered),
            code,
        }
    }

    async fn post(&self, template_params: Value) -> reqwest::Result<()> {
        let payload = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params,
        };

        self.client
            .post(&self.config.api_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    fn build_reset_link(&self, email: &str) -> String {
        let base = format!(
            "{}/reset-password",
            self.config.app_base_url.trim_end_matches('/')
        );

        match Url::parse(&base) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .append_pair("email", email)
                    .append_pair("token", &generate_reset_token());
                url.to_string()
            }
            // An unparseable base still yields a recognizable link.
            Err(_) => format!("{}?email={}&token={}", base, email, generate_reset_token()),
        }
    }

    fn failed() -> DispatchResult {
        DispatchResult {
            outcome: DispatchOutcome::Failed,
            message: FAILED_MESSAGE.to_string(),
            rendered: None,
            code: None,
        }
    }
}
