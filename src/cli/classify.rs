//! Classify command - one-shot classification from the command line

use clap::Args;

use crate::config::AppConfig;
use crate::domain::classification::validate_name;
use crate::infrastructure::logging;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Name to classify
    pub name: String,
}

/// Validate and classify `args.name`, printing the verdict JSON to stdout
pub async fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let name = validate_name(&args.name, &config.validation.rules())?;
    let state = crate::create_app_state(&config).await?;

    let verdict = state.classifier.classify(&name).await?;
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    Ok(())
}
