//! Recognition settings for embedded template languages.

mod config;

pub use config::TemplateSettings;
