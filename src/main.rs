use anyhow::Context;
use clap::Parser;
use fauxcard::utils::error::{CardGenError, ErrorSeverity};
use fauxcard::utils::logger;
use fauxcard::utils::validation::{validate_path, Validate};
use fauxcard::{
    CardPipeline, CliConfig, GenerationEngine, NetworkRegistry, Settings, StdoutSink, TomlConfig,
};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(err) = run(&cli) {
        let exit_code = match err.downcast_ref::<CardGenError>() {
            Some(e) => {
                tracing::error!(
                    "{:#} (Category: {:?}, Severity: {:?})",
                    err,
                    e.category(),
                    e.severity()
                );
                tracing::error!("Suggestion: {}", e.recovery_suggestion());
                eprintln!("{}", e.user_friendly_message());
                eprintln!("Suggestion: {}", e.recovery_suggestion());

                match e.severity() {
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                }
            }
            None => {
                tracing::error!("{:#}", err);
                eprintln!("{:#}", err);
                1
            }
        };

        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let preset = match cli.config.as_deref() {
        Some(path) => {
            validate_path("config", path)?;
            tracing::info!("Loading preset from: {}", path);
            let preset = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load preset '{}'", path))?;
            preset
                .validate()
                .with_context(|| format!("invalid preset '{}'", path))?;
            Some(preset)
        }
        None => None,
    };

    let registry = match &preset {
        Some(preset) => preset.build_registry()?,
        None => NetworkRegistry::builtin(),
    };

    if cli.list_networks {
        print_networks(&registry);
        return Ok(());
    }

    let settings = Settings::resolve(&cli.overrides(), preset.as_ref());
    settings.validate()?;

    let pipeline = CardPipeline::new(StdoutSink::new(), settings, registry);
    let mut engine = GenerationEngine::new(pipeline);

    let summary = engine.run().context("card generation failed")?;
    if summary.generated == 0 {
        tracing::warn!("No cards generated; check the network name with --list-networks");
    }

    Ok(())
}

fn print_networks(registry: &NetworkRegistry) {
    println!("{:<20} {:>6} {:>4}  Prefixes", "Network", "Length", "CVV");
    for profile in registry.profiles() {
        println!(
            "{:<20} {:>6} {:>4}  {}",
            profile.name,
            profile.length,
            profile.cvv_length,
            profile.prefixes.join(", ")
        );
    }
}
