pub mod engine;
pub mod locator;
pub mod reader;
pub mod report;

pub use crate::domain::model::{AccessToken, Identifier, Person, SearchResult};
pub use crate::domain::ports::Reporter;
pub use crate::utils::error::Result;
