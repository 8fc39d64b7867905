pub mod config;
pub mod export;

pub use config::{AppConfig, DEFAULT_CONFIG_YAML};
pub use export::ExportDocument;
