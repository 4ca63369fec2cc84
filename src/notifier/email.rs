use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde::Serialize;

use crate::config::EmailConfig;
use crate::error::{AppError, Result};
use crate::event::{ResultPayload, SqsRecord};

use super::Notifier;

/// Submits each rendered notification to an HTTP mail gateway as a JSON
/// `{from, to, subject, text}` document.
pub struct EmailNotifier {
    config: EmailConfig,
    client: reqwest::Client,
}

/// Wire format accepted by the mail gateway.
#[derive(Debug, Serialize)]
struct MailSubmission<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
}

impl EmailNotifier {
    pub fn new(config: EmailConfig) -> Result<Self> {
        if config.from.is_empty() {
            return Err(AppError::Config(
                "notifier.email.from must be set".to_string(),
            ));
        }
        if config.to.is_empty() {
            return Err(AppError::Config(
                "notifier.email.to must not be empty".to_string(),
            ));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(format!("failed to construct mail client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(
        &self,
        _result: &ResultPayload,
        rendered: &str,
        _record: &SqsRecord,
    ) -> Result<()> {
        let submission = MailSubmission {
            from: &self.config.from,
            to: &self.config.to,
            subject: &self.config.subject,
            text: rendered,
        };

        let mut request = self.client.post(&self.config.endpoint).json(&submission);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Delivery(format!(
                "mail gateway returned {status}"
            )));
        }

        tracing::debug!(
            endpoint = %self.config.endpoint,
            recipients = self.config.to.len(),
            "Submitted notification to mail gateway"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> EmailConfig {
        EmailConfig {
            from: "noreply@example.com".to_string(),
            to: vec!["ops@example.com".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_sender_and_recipients() {
        let missing_from = EmailConfig {
            to: vec!["ops@example.com".to_string()],
            ..Default::default()
        };
        assert!(EmailNotifier::new(missing_from).is_err());

        let missing_to = EmailConfig {
            from: "noreply@example.com".to_string(),
            ..Default::default()
        };
        assert!(EmailNotifier::new(missing_to).is_err());

        assert!(EmailNotifier::new(configured()).is_ok());
    }

    #[test]
    fn test_submission_wire_format() {
        let config = configured();
        let submission = MailSubmission {
            from: &config.from,
            to: &config.to,
            subject: &config.subject,
            text: "Status ok",
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["from"], "noreply@example.com");
        assert_eq!(json["to"][0], "ops@example.com");
        assert_eq!(json["subject"], "Notification");
        assert_eq!(json["text"], "Status ok");
    }
}
