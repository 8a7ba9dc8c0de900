pub mod config;
pub mod core;
pub mod domain;
pub mod orcid;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::engine::{CheckEngine, RunSummary};
pub use crate::core::locator;
pub use crate::core::report::ConsoleReporter;
pub use crate::domain::model::{AccessToken, Identifier, Person, SearchResult};
pub use crate::domain::ports::Reporter;
pub use crate::orcid::client::{LookupResponse, OrcidClient};
pub use crate::orcid::throttle::FixedDelay;
pub use crate::utils::error::{CheckError, Result};
