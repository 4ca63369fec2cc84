use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub handler: HandlerConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HandlerConfig {
    /// Queue ARN the dispatcher accepts records from; any ARN is accepted when unset
    pub expected_queue_arn: Option<String>,
    /// Inject `result_type` from message attributes when the payload carries none
    #[serde(default)]
    pub include_result_type: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Environment variable holding the notification template
    #[serde(default = "default_template_var")]
    pub env_var: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    /// Delivery channel: "print" or "email"
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// HTTP mail gateway submission endpoint
    #[serde(default = "default_email_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default = "default_email_subject")]
    pub subject: String,
    /// Bearer token for the gateway (optional)
    pub api_key: Option<String>,
    #[serde(default = "default_email_timeout")]
    pub timeout_seconds: u64,
}

fn default_template_var() -> String {
    "TEMPLATE".to_string()
}

fn default_channel() -> String {
    "print".to_string()
}

fn default_email_endpoint() -> String {
    "http://localhost:8025/send".to_string()
}

fn default_email_subject() -> String {
    "Notification".to_string()
}

fn default_email_timeout() -> u64 {
    10 // 10 seconds
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("handler.include_result_type", false)?
            .set_default("template.env_var", "TEMPLATE")?
            .set_default("notifier.channel", "print")?
            .set_default("notifier.email.endpoint", "http://localhost:8025/send")?
            .set_default("notifier.email.subject", "Notification")?
            .set_default("notifier.email.timeout_seconds", 10)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // HANDLER__EXPECTED_QUEUE_ARN, NOTIFIER__CHANNEL, NOTIFIER__EMAIL__ENDPOINT, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            expected_queue_arn: None,
            include_result_type: false,
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            env_var: default_template_var(),
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            email: EmailConfig::default(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: default_email_endpoint(),
            from: String::new(),
            to: vec![],
            subject: default_email_subject(),
            api_key: None,
            timeout_seconds: default_email_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let handler = HandlerConfig::default();
        assert!(handler.expected_queue_arn.is_none());
        assert!(!handler.include_result_type);

        let notifier = NotifierConfig::default();
        assert_eq!(notifier.channel, "print");
        assert_eq!(notifier.email.subject, "Notification");
        assert_eq!(notifier.email.timeout_seconds, 10);
    }

    #[test]
    fn test_default_template_var() {
        let template = TemplateConfig::default();
        assert_eq!(template.env_var, "TEMPLATE");
    }
}
