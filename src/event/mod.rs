//! Inbound queue event model and per-record payload extraction.
//!
//! Records arrive either directly from SQS (the body is the result payload)
//! or through an SNS fan-out subscription (the body is an SNS envelope whose
//! `Message` field carries the payload as a JSON string). The parser
//! normalizes both shapes into a plain JSON object.

mod parser;
mod provenance;
mod types;

pub use parser::parse_result;
pub use provenance::{validate_provenance, SUPPORTED_EVENT_SOURCE};
pub use types::{MessageAttribute, ResultPayload, SqsEvent, SqsRecord};
