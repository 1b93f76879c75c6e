use clap::error::ErrorKind;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use secret_santa::adapters::render;
use secret_santa::config::usage_error;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, LocalStorage, Result, RunSettings, SantaEngine};

#[tokio::main]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let error = usage_error(&e);
            eprintln!("{}", error.user_friendly_message());
            std::process::exit(error.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::debug!(
            "❌ Secret Santa failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<()> {
    let settings: RunSettings = config.into_settings()?;
    settings.validate()?;

    let mut rng = match settings.seed {
        Some(seed) => {
            tracing::info!("🎲 Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let format = settings.format;

    let engine = SantaEngine::new(LocalStorage::default(), settings);
    let assignment = engine.run(&mut rng).await?;

    // 先寫檔，確定成功後才輸出到 stdout
    engine.save(&assignment).await?;
    print!("{}", render(&assignment, format)?);

    Ok(())
}
