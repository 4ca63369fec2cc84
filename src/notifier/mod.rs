//! Pluggable delivery channels.
//!
//! A channel receives the enriched result, the rendered text, and the
//! original record, and turns them into an observable side effect. New
//! channels are added by implementing [`Notifier`]; `create_notifier`
//! builds the one named by configuration.

mod email;
mod print;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::NotifierConfig;
use crate::error::Result;
use crate::event::{ResultPayload, SqsRecord};

pub use email::EmailNotifier;
pub use print::PrintNotifier;

/// A delivery channel for rendered notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification. Must accept any well-formed triple; errors
    /// propagate to the caller and abort the batch.
    async fn notify(
        &self,
        result: &ResultPayload,
        rendered: &str,
        record: &SqsRecord,
    ) -> Result<()>;
}

/// Create a delivery channel based on configuration.
///
/// Returns the implementation named by the `channel` setting:
/// - `"email"`: submits to the configured HTTP mail gateway
/// - `"print"` (default): writes rendered notifications to stdout
pub fn create_notifier(config: &NotifierConfig) -> Result<Arc<dyn Notifier>> {
    match config.channel.as_str() {
        "email" => {
            tracing::info!(
                channel = "email",
                endpoint = %config.email.endpoint,
                "Creating email notifier"
            );
            Ok(Arc::new(EmailNotifier::new(config.email.clone())?))
        }
        _ => {
            tracing::info!(channel = "print", "Creating print notifier");
            Ok(Arc::new(PrintNotifier::stdout()))
        }
    }
}
