use clap::Parser;
use impactify::utils::{logger, validation::Validate};
use impactify::{
    load_acronyms, CliConfig, Exporter, ImpactSession, LocalStorage, Prompter, StatementFormatter,
    SystemClipboard, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match TomlConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // The acronym list is required before anything is asked.
    let entries = match load_acronyms(&LocalStorage::current_dir(), config.acronyms_path()).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let formatter = StatementFormatter::new(&entries)?;
    tracing::debug!("Acronym index holds {} entries", formatter.acronyms().len());
    let storage = LocalStorage::new(config.output_dir().to_string());
    let exporter = Exporter::new(storage, SystemClipboard::new());
    let session = ImpactSession::new(formatter, exporter).with_export_choice(cli.export_choice());

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout(), config.max_attempts());

    match session.run(&mut prompter).await {
        Ok(report) => {
            tracing::info!("✅ Impact statement generated ({:?})", report.export);
            Ok(())
        }
        Err(e) if e.is_statement_error() => std::process::exit(2),
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
