use serde_json::Value;

use crate::error::{AppError, Result};

use super::types::{ResultPayload, SqsRecord};

/// Key marking an SNS fan-out envelope. Unwrapping is exactly one level deep;
/// a payload that itself uses this key name is indistinguishable from an
/// envelope and is unwrapped like one.
const SNS_MESSAGE_KEY: &str = "Message";

/// Extract the result payload from a record body, unwrapping an SNS envelope
/// when present. The final payload must be a JSON object.
pub fn parse_result(record: &SqsRecord) -> Result<ResultPayload> {
    let body = record
        .body
        .as_deref()
        .filter(|body| !body.is_empty())
        .ok_or_else(|| AppError::Validation("SQS record body is missing".to_string()))?;

    let outer: Value = serde_json::from_str(body)
        .map_err(|_| AppError::Validation("SQS record body must be valid JSON".to_string()))?;

    let payload = unwrap_sns_envelope(outer)?;

    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Validation(
            "Result payload must be a JSON object".to_string(),
        )),
    }
}

/// Replace an SNS envelope with the payload encoded in its `Message` field.
/// Bodies without a `Message` key (or with a null one) pass through untouched.
fn unwrap_sns_envelope(outer: Value) -> Result<Value> {
    let message = match &outer {
        Value::Object(map) => map.get(SNS_MESSAGE_KEY),
        _ => None,
    };

    match message {
        None | Some(Value::Null) => Ok(outer),
        Some(Value::String(inner)) => serde_json::from_str(inner)
            .map_err(|_| AppError::Validation("SNS message must be valid JSON".to_string())),
        Some(_) => Err(AppError::Validation(
            "SNS message must be a JSON string".to_string(),
        )),
    }
}
