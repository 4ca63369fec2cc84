use serde_json::Value;

use crate::event::{ResultPayload, SqsRecord};

/// Classification field injected into result payloads.
pub const RESULT_TYPE_KEY: &str = "result_type";

/// Apply the `result_type` derivation policy. Precedence, first match wins:
/// a `result_type` key already in the payload is never overwritten; otherwise
/// the record's `result_type` message attribute is injected when enrichment
/// is enabled; otherwise the field stays absent.
pub fn enrich_result(
    mut payload: ResultPayload,
    record: &SqsRecord,
    include_result_type: bool,
) -> ResultPayload {
    if payload.contains_key(RESULT_TYPE_KEY) {
        return payload;
    }

    if include_result_type {
        if let Some(value) = record.attribute_value(RESULT_TYPE_KEY) {
            payload.insert(
                RESULT_TYPE_KEY.to_string(),
                Value::String(value.to_string()),
            );
        }
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    use crate::event::MessageAttribute;

    fn record_with_attribute(value: &str) -> SqsRecord {
        let mut attributes = HashMap::new();
        attributes.insert(
            RESULT_TYPE_KEY.to_string(),
            MessageAttribute {
                string_value: Some(value.to_string()),
                data_type: Some("String".to_string()),
            },
        );
        SqsRecord {
            message_attributes: Some(attributes),
            ..Default::default()
        }
    }

    fn payload(value: serde_json::Value) -> ResultPayload {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_payload_result_type_always_wins() {
        let input = payload(json!({"status": "ok", "result_type": "payload"}));
        let record = record_with_attribute("attribute");

        for include in [true, false] {
            let enriched = enrich_result(input.clone(), &record, include);
            assert_eq!(enriched.get(RESULT_TYPE_KEY), Some(&json!("payload")));
        }
    }

    #[test]
    fn test_attribute_injected_when_enabled() {
        let input = payload(json!({"status": "ok"}));
        let record = record_with_attribute("attribute");

        let enriched = enrich_result(input, &record, true);
        assert_eq!(enriched.get(RESULT_TYPE_KEY), Some(&json!("attribute")));
    }

    #[test]
    fn test_attribute_ignored_when_disabled() {
        let input = payload(json!({"status": "ok"}));
        let record = record_with_attribute("attribute");

        let enriched = enrich_result(input, &record, false);
        assert!(!enriched.contains_key(RESULT_TYPE_KEY));
    }

    #[test]
    fn test_no_injection_without_attribute() {
        let input = payload(json!({"status": "ok"}));
        let record = SqsRecord::default();

        let enriched = enrich_result(input, &record, true);
        assert!(!enriched.contains_key(RESULT_TYPE_KEY));
    }

    #[test]
    fn test_attribute_without_string_value_is_ignored() {
        let mut attributes = HashMap::new();
        attributes.insert(
            RESULT_TYPE_KEY.to_string(),
            MessageAttribute {
                string_value: None,
                data_type: Some("Binary".to_string()),
            },
        );
        let record = SqsRecord {
            message_attributes: Some(attributes),
            ..Default::default()
        };

        let enriched = enrich_result(payload(json!({"status": "ok"})), &record, true);
        assert!(!enriched.contains_key(RESULT_TYPE_KEY));
    }
}
