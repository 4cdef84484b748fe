pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig};

pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::engine::{DashboardReport, InsightEngine};
pub use core::sentiment::SentimentClassifier;
pub use core::store::RecordStore;
pub use utils::error::{EngineError, Result};
