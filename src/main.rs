use anyhow::Context;
use clap::Parser;
use emoji_dupes::utils::{logger, validation::Validate};
use emoji_dupes::{write_report, CliConfig, DuplicateNamePipeline, LocalStorage, ReportEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::default();
    let pipeline = DuplicateNamePipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(duplicates) => {
            let stdout = std::io::stdout();
            write_report(&mut stdout.lock(), &duplicates).context("Failed to write report")?;
        }
        Err(e) => {
            tracing::error!(
                "Duplicate name check failed: {} (Category: {:?})",
                e,
                e.category()
            );

            // 失敗時 stdout 不輸出任何內容
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
