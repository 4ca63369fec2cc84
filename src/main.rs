use std::io::Read;
use std::sync::Arc;
use std::{env, fs, io};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sqs_notification_dispatcher::config::Settings;
use sqs_notification_dispatcher::event::SqsEvent;
use sqs_notification_dispatcher::notification::NotificationDispatcher;
use sqs_notification_dispatcher::notifier::create_notifier;
use sqs_notification_dispatcher::template::EnvVarTemplateProvider;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded");

    // Build the delivery channel and template source
    let notifier = create_notifier(&settings.notifier)?;
    let template_provider = Arc::new(EnvVarTemplateProvider::with_var(
        settings.template.env_var.as_str(),
    ));

    let mut dispatcher = NotificationDispatcher::new(template_provider, notifier)
        .with_result_type(settings.handler.include_result_type);
    if let Some(arn) = &settings.handler.expected_queue_arn {
        dispatcher = dispatcher.with_expected_queue_arn(arn.as_str());
    }

    // One invocation per process: read the event document, dispatch, exit
    let event = read_event()?;
    tracing::info!(record_count = event.records.len(), "Event loaded");

    dispatcher.handle_event(&event).await?;

    tracing::info!("Batch dispatched");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Read the event JSON document from the file named by the first argument,
/// or from stdin when no argument is given.
fn read_event() -> Result<SqsEvent> {
    let raw = match env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("failed to read event file {path}"))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read event from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("event document must be valid JSON")
}
