use clap::Parser;
use orcid_check::utils::{logger, validation::Validate};
use orcid_check::{
    locator, CheckEngine, CliConfig, ConsoleReporter, FixedDelay, OrcidClient, Result, RunSummary,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting orcid-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    match run(config).await {
        Ok(summary) => {
            tracing::info!("✅ Check completed successfully!");
            println!(
                "✅ Checked {} record(s) in {} file(s): {} lookup(s), {} match(es)",
                summary.records, summary.files, summary.lookups, summary.matches
            );
        }
        Err(e) => {
            tracing::error!("❌ Check failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(config: CliConfig) -> Result<RunSummary> {
    let files = locator::locate_input_files(&config.files)?;
    tracing::info!("Found {} file(s) to process", files.len());

    let client = OrcidClient::new(
        config.token_url.clone(),
        config.api_url.clone(),
        FixedDelay::from_millis(config.throttle_ms),
    );

    let token = client
        .request_token(&config.client_id, &config.client_secret)
        .await?;
    tracing::info!("Obtained access token (scope: {})", token.scope);

    let mut engine = CheckEngine::new(client, token, ConsoleReporter);
    engine.run(&files).await
}
