use clap::Parser;
use std::io;
use where_to_go::config::participants::{
    parse_participant_list, prompt_participants, require_participants,
};
use where_to_go::core::ConfigProvider;
use where_to_go::utils::error::ErrorSeverity;
use where_to_go::utils::{logger, validation::Validate};
use where_to_go::{
    CliConfig, LocalStorage, RecommendationPipeline, RecommendationRunner, Result, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting where-to-go");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(cli).await {
        Ok(rendered) => {
            tracing::info!("✅ Recommendation completed successfully!");
            println!("{}", rendered);
        }
        Err(e) => {
            tracing::error!(
                "❌ Recommendation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: CliConfig) -> Result<String> {
    let participants = match &cli.list {
        Some(list) => parse_participant_list(list),
        None => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout();
            prompt_participants(&mut input, &mut output)?
        }
    };
    let participants = require_participants(participants)?;

    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            let monitor = cli.monitor || config.monitoring_enabled();
            execute(config, participants, monitor).await
        }
        None => {
            let monitor = cli.monitor;
            execute(cli, participants, monitor).await
        }
    }
}

async fn execute<C: ConfigProvider + Validate>(
    config: C,
    participants: Vec<String>,
    monitor: bool,
) -> Result<String> {
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().unwrap_or(".").to_string());
    let pipeline = RecommendationPipeline::new(storage, config, participants);

    RecommendationRunner::new_with_monitoring(pipeline, monitor)
        .run()
        .await
}
