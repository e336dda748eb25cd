use clap::Parser;
use qr_scad::domain::ports::ConfigProvider;
use qr_scad::utils::{logger, validation::Validate};
use qr_scad::{CliConfig, LocalStorage, ModelEngine, Result, ScadPipeline, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting qr-scad");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => generate(config),
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML");
                    std::process::exit(1);
                }
            }
        }
        None => generate(cli),
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Model generation completed successfully!");
            println!("✅ Model saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Model generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn generate<C: ConfigProvider + Validate>(config: C) -> Result<String> {
    config.validate()?;

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ScadPipeline::new(storage, &config);
    ModelEngine::new(pipeline).run()
}
