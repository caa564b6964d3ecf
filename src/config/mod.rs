pub mod fetch;
pub mod manifest;

#[cfg(feature = "cli")]
use crate::utils::validation::{validate_model_name, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "onco-demo")]
#[command(about = "An interactive console for breast cancer prediction models")]
pub struct CliConfig {
    /// Directory holding serialized model artifacts
    #[arg(long, default_value = "artifacts")]
    pub artifact_dir: String,

    /// Model to predict with; prompts interactively when omitted
    #[arg(long)]
    pub model: Option<String>,

    /// Canned sample to predict ("negative" or "positive"); prompts when omitted
    #[arg(long)]
    pub sample: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("artifact_dir", &self.artifact_dir)?;

        if let Some(model) = &self.model {
            validate_model_name("model", model)?;
        }

        Ok(())
    }
}
