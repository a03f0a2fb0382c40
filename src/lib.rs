pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clipboard::SystemClipboard;
pub use app::{export::Exporter, prompt::Prompter, session::ImpactSession};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::acronyms::{load_acronyms, AcronymIndex};
pub use crate::core::formatter::StatementFormatter;
pub use domain::model::{AcronymEntry, ExportChoice, ExportOutcome, ImpactAnswers};
pub use utils::error::{ImpactError, Result};
