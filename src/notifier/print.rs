use std::io::{self, Write};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::event::{ResultPayload, SqsRecord};

use super::Notifier;

/// Writes each rendered notification as one line to an injectable sink,
/// stdout by default.
pub struct PrintNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl PrintNotifier {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Mutex::new(out) }
    }
}

#[async_trait]
impl Notifier for PrintNotifier {
    async fn notify(
        &self,
        _result: &ResultPayload,
        rendered: &str,
        _record: &SqsRecord,
    ) -> Result<()> {
        let mut out = self.out.lock().await;
        writeln!(out, "{rendered}").map_err(|e| AppError::Delivery(e.to_string()))?;
        out.flush().map_err(|e| AppError::Delivery(e.to_string()))?;
        Ok(())
    }
}
