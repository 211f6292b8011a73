use clap::Parser;
use letter_count::core::ConfigProvider;
use letter_count::utils::{logger, validation::Validate};
use letter_count::{CliConfig, CountEngine, CountPipeline, LocalStorage, RunOutcome, TomlConfig};

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

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(mut config) => {
                    cli.overlay(&mut config);
                    run(config).await
                }
                Err(e) => Err(e),
            }
        }
        None => run(cli.clone()).await,
    };

    match result {
        Ok(outcome) => {
            if outcome.destination != "stdout" {
                eprintln!("Letter counts written to {}", outcome.destination);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Letter count failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run<C>(config: C) -> letter_count::Result<RunOutcome>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let pipeline = CountPipeline::new(LocalStorage::default(), config);
    CountEngine::new(pipeline).run().await
}
