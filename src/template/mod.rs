//! Notification template sourcing and rendering.
//!
//! Templates interpolate `{{variable}}` placeholders from the enriched result
//! payload and may supply a fallback with `{{variable | default('value')}}`.
//! A placeholder with neither a value nor a default is a hard error: it
//! signals a template/payload mismatch, not a per-message data problem.

mod provider;
mod render;
mod types;

pub use provider::{EnvVarTemplateProvider, StaticTemplateProvider, TemplateProvider};
pub use render::render;
pub use types::{TemplateError, TemplateResult};
