use std::env;

use crate::error::{AppError, Result};

/// Source of the template string used for rendering.
pub trait TemplateProvider: Send + Sync {
    /// Return the configured template, failing when none is set.
    fn get_template(&self) -> Result<String>;
}

/// Reads the template from an environment variable, `TEMPLATE` by default.
/// The variable is read on every call so it only needs to be current at
/// render time.
pub struct EnvVarTemplateProvider {
    var: String,
}

impl EnvVarTemplateProvider {
    pub const DEFAULT_VAR: &'static str = "TEMPLATE";

    pub fn new() -> Self {
        Self::with_var(Self::DEFAULT_VAR)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvVarTemplateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateProvider for EnvVarTemplateProvider {
    fn get_template(&self) -> Result<String> {
        match env::var(&self.var) {
            Ok(template) if !template.is_empty() => Ok(template),
            _ => Err(AppError::Config(format!("{} must be set", self.var))),
        }
    }
}

/// Serves a fixed template string, for inline configuration and tests.
pub struct StaticTemplateProvider {
    template: String,
}

impl StaticTemplateProvider {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl TemplateProvider for StaticTemplateProvider {
    fn get_template(&self) -> Result<String> {
        Ok(self.template.clone())
    }
}
