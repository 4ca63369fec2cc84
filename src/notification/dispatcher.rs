use std::sync::Arc;

use crate::error::Result;
use crate::event::{parse_result, validate_provenance, SqsEvent, SqsRecord};
use crate::notifier::Notifier;
use crate::template::{render, TemplateProvider};

use super::enrich::enrich_result;

/// Dispatches one batch of queue records to the configured delivery channel.
///
/// Holds only immutable configuration and the injected collaborators, so a
/// single instance may serve concurrent batch invocations; records within a
/// batch are always processed sequentially.
pub struct NotificationDispatcher {
    template_provider: Arc<dyn TemplateProvider>,
    notifier: Arc<dyn Notifier>,
    expected_queue_arn: Option<String>,
    include_result_type: bool,
}

impl NotificationDispatcher {
    /// Create a dispatcher that accepts records from any queue instance and
    /// performs no attribute enrichment.
    pub fn new(template_provider: Arc<dyn TemplateProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            template_provider,
            notifier,
            expected_queue_arn: None,
            include_result_type: false,
        }
    }

    /// Require records to originate from the given queue ARN.
    pub fn with_expected_queue_arn(mut self, arn: impl Into<String>) -> Self {
        self.expected_queue_arn = Some(arn.into());
        self
    }

    /// Inject `result_type` from message attributes when the payload carries none.
    pub fn with_result_type(mut self, include: bool) -> Self {
        self.include_result_type = include;
        self
    }

    /// Process one event batch: validate provenance of every record, then run
    /// each record through parse → enrich → render → deliver in order.
    ///
    /// The first failure of any stage aborts the batch and propagates; records
    /// after the failing one are not processed. An event without records is a
    /// no-op.
    #[tracing::instrument(
        name = "dispatcher.handle_event",
        skip(self, event),
        fields(record_count = event.records.len())
    )]
    pub async fn handle_event(&self, event: &SqsEvent) -> Result<()> {
        if event.records.is_empty() {
            tracing::debug!("Event carries no records, nothing to dispatch");
            return Ok(());
        }

        let template = self.template_provider.get_template()?;

        // Provenance pass over the whole batch first: a record from the wrong
        // source or queue anywhere in the batch means zero deliveries.
        for record in &event.records {
            validate_provenance(record, self.expected_queue_arn.as_deref())?;
        }

        for record in &event.records {
            self.process_record(&template, record).await?;
        }

        Ok(())
    }

    async fn process_record(&self, template: &str, record: &SqsRecord) -> Result<()> {
        let payload = parse_result(record)?;
        let result = enrich_result(payload, record, self.include_result_type);
        let rendered = render(template, &result)?;

        self.notifier.notify(&result, &rendered, record).await?;

        tracing::info!(
            record = ?record,
            rendered = %rendered,
            outcome = "delivered",
            "notification_invocation"
        );

        Ok(())
    }
}
