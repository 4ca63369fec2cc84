use crate::error::{AppError, Result};

use super::types::SqsRecord;

/// The single channel kind this dispatcher accepts; heterogeneous batches are
/// rejected at the first foreign record.
pub const SUPPORTED_EVENT_SOURCE: &str = "aws:sqs";

/// Check a record's declared source and queue instance against expectations.
/// A record missing its ARN while one is expected counts as a mismatch.
pub fn validate_provenance(record: &SqsRecord, expected_queue_arn: Option<&str>) -> Result<()> {
    if record.event_source.as_deref() != Some(SUPPORTED_EVENT_SOURCE) {
        return Err(AppError::Validation("Unsupported event source".to_string()));
    }

    if let Some(expected) = expected_queue_arn {
        if record.event_source_arn.as_deref() != Some(expected) {
            return Err(AppError::Validation("SQS queue mismatch".to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqs_record(arn: Option<&str>) -> SqsRecord {
        SqsRecord {
            body: Some("{}".to_string()),
            event_source: Some("aws:sqs".to_string()),
            event_source_arn: arn.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_supported_source_without_expectation() {
        assert!(validate_provenance(&sqs_record(None), None).is_ok());
    }

    #[test]
    fn test_rejects_foreign_event_source() {
        let record = SqsRecord {
            event_source: Some("aws:s3".to_string()),
            ..Default::default()
        };
        let err = validate_provenance(&record, None).unwrap_err();
        assert!(err.to_string().contains("Unsupported event source"));
    }

    #[test]
    fn test_rejects_missing_event_source() {
        let record = SqsRecord::default();
        let err = validate_provenance(&record, None).unwrap_err();
        assert!(err.to_string().contains("Unsupported event source"));
    }

    #[test]
    fn test_accepts_matching_queue_arn() {
        let record = sqs_record(Some("arn:aws:sqs:us-east-1:123:queue"));
        assert!(validate_provenance(&record, Some("arn:aws:sqs:us-east-1:123:queue")).is_ok());
    }

    #[test]
    fn test_rejects_queue_arn_mismatch() {
        let record = sqs_record(Some("arn:aws:sqs:us-east-1:123:other"));
        let err =
            validate_provenance(&record, Some("arn:aws:sqs:us-east-1:123:queue")).unwrap_err();
        assert!(err.to_string().contains("SQS queue mismatch"));
    }

    #[test]
    fn test_missing_arn_counts_as_mismatch() {
        let record = sqs_record(None);
        let err =
            validate_provenance(&record, Some("arn:aws:sqs:us-east-1:123:queue")).unwrap_err();
        assert!(err.to_string().contains("SQS queue mismatch"));
    }
}
