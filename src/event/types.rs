use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A parsed result payload: always a JSON object after envelope unwrapping.
pub type ResultPayload = serde_json::Map<String, serde_json::Value>;

/// One queue invocation event: an ordered batch of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqsEvent {
    /// Records in delivery order; absent means an empty batch
    #[serde(rename = "Records", default)]
    pub records: Vec<SqsRecord>,
}

/// One message record as delivered by the queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqsRecord {
    /// Raw textual payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Originating channel kind (e.g. "aws:sqs")
    #[serde(rename = "eventSource", skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,

    /// ARN of the queue instance that produced the record
    #[serde(rename = "eventSourceARN", skip_serializing_if = "Option::is_none")]
    pub event_source_arn: Option<String>,

    /// Channel-supplied metadata, may carry a classification hint
    #[serde(rename = "messageAttributes", skip_serializing_if = "Option::is_none")]
    pub message_attributes: Option<HashMap<String, MessageAttribute>>,
}

/// A single message attribute value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageAttribute {
    /// Primary value representation
    #[serde(rename = "stringValue", skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    /// Attribute type tag (e.g. "String", "Number")
    #[serde(rename = "dataType", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl SqsRecord {
    /// Look up a message attribute's primary value by name.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.message_attributes
            .as_ref()?
            .get(name)?
            .string_value
            .as_deref()
    }
}
