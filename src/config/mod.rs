#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

pub const DEFAULT_BASE_URL: &str = "https://68d448d6214be68f8c68eb21.mockapi.io/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for [`crate::PlacesClient`]. Explicit rather than
/// module-level, so tests can point a client at a mock endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_ms", self.timeout_ms, 1)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "nearby-places")]
#[command(about = "Fetch nearby touristic places from the exploration API")]
pub struct CliArgs {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[arg(long, default_value = "all", help = "Only show places in this category")]
    pub category: String,

    #[arg(long, help = "List available categories instead of places")]
    pub list_categories: bool,

    #[arg(long, help = "Emit places as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}
