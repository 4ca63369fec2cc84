//! Result enrichment and batch dispatching.
//!
//! The dispatcher runs each record of a batch through the full pipeline
//! (provenance → parse → enrich → render → deliver) and aborts the whole
//! batch on the first failure. The hosting queue infrastructure owns
//! redelivery, so batch outcomes stay all-or-nothing.

mod dispatcher;
mod enrich;

pub use dispatcher::NotificationDispatcher;
pub use enrich::{enrich_result, RESULT_TYPE_KEY};
