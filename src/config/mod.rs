mod settings;

pub use settings::{EmailConfig, HandlerConfig, NotifierConfig, Settings, TemplateConfig};
