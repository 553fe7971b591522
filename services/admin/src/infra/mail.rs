use anyhow::Context as _;
use serde::Serialize;
use std::time::Duration;

use crate::config::AdminConfig;
use crate::domain::repository::Mailer;

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Mail-API adapter: posts the message as JSON with bearer auth. The client
/// carries a request timeout, so a hung transport surfaces as a delivery
/// error instead of stalling the login flow.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(config: &AdminConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.mail_timeout_secs))
            .build()
            .expect("failed to build mail client");
        Self {
            client,
            endpoint: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
        }
    }
}

impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, body_html: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendRequest {
                from: &self.from,
                to,
                subject,
                html: body_html,
            })
            .send()
            .await
            .context("mail API request failed")?;

        response
            .error_for_status()
            .context("mail API rejected the message")?;
        Ok(())
    }
}
