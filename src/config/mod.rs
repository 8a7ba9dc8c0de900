use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "orcid-check")]
#[command(about = "Checks whether Scopus IDs from Person export files appear in ORCID profiles")]
pub struct CliConfig {
    #[arg(long = "client_id", default_value = "", help = "Client ID for ORCID API")]
    pub client_id: String,

    #[arg(
        long = "client_secret",
        default_value = "",
        help = "Client Secret for ORCID API"
    )]
    pub client_secret: String,

    #[arg(long, default_value = "https://orcid.org/oauth/token")]
    pub token_url: String,

    #[arg(long, default_value = "https://pub.orcid.org/v2.0")]
    pub api_url: String,

    #[arg(
        long,
        default_value = "1",
        help = "Delay in milliseconds after each search request"
    )]
    pub throttle_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(value_name = "FILE", help = "Person export files to process")]
    pub files: Vec<PathBuf>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("client_id", &self.client_id)?;
        validate_non_empty_string("client_secret", &self.client_secret)?;
        validate_url("token_url", &self.token_url)?;
        validate_url("api_url", &self.api_url)?;
        Ok(())
    }
}

// Manual Debug so the client secret never lands in a log line.
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("throttle_ms", &self.throttle_ms)
            .field("verbose", &self.verbose)
            .field("files", &self.files)
            .finish()
    }
}
