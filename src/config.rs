use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use secrecy::SecretString;

use crate::catalog::Catalog;
use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://llm.wavespeed.ai/v1/chat/completions";

/// Where pages go and which keywords they cover.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory receiving <slug>.html, index.html and sitemap.xml
    #[arg(long, default_value = "generated_articles")]
    pub output_dir: PathBuf,

    /// YAML keyword catalog; the built-in catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Public base URL of the output directory, enables sitemap.xml
    #[arg(long)]
    pub site_url: Option<String>,
}

impl OutputArgs {
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::embedded()?,
        };
        Ok(catalog)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Bearer credential for the text-generation endpoint
    #[arg(long, env = "ARTICLEGEN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "ARTICLEGEN_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, default_value = "gpt-4")]
    pub model: String,

    #[arg(long, default_value_t = 0.7)]
    pub temperature: f32,

    #[arg(long, default_value_t = 3000)]
    pub max_tokens: u32,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Pause after each successful article
    #[arg(long, default_value_t = 3)]
    pub delay_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub api: ApiArgs,
}

/// Validated endpoint settings.
#[derive(Debug)]
pub struct ApiSettings {
    pub url: String,
    pub api_key: SecretString,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ApiArgs {
    pub fn settings(&self) -> Result<ApiSettings, ConfigError> {
        let api_key = match &self.api_key {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => return Err(ConfigError::MissingApiKey),
        };
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Temperature(self.temperature));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Zero("max_tokens"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Zero("timeout_secs"));
        }

        Ok(ApiSettings {
            url: self.api_url.clone(),
            api_key: SecretString::new(api_key.into_boxed_str()),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}
