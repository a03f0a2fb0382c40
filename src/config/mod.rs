pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ExportChoice;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "impactify")]
#[command(about = "Turn a few short answers into an engineer impact statement")]
#[command(version)]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./impactify.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the acronyms JSON file
    #[arg(long)]
    pub acronyms: Option<String>,

    /// Directory that Markdown and JSON exports are written to
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Export choice (1 clipboard, 2 markdown, 3 JSON, 4 none); skips the menu
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub export: Option<u8>,

    /// How many times a blank required answer is asked again
    #[arg(long)]
    pub max_attempts: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn export_choice(&self) -> Option<ExportChoice> {
        self.export
            .map(|choice| ExportChoice::from_menu(&choice.to_string()))
    }
}
