use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier scheme that marks a Scopus author ID.
pub const SCOPUS_SCHEME: &str = "scopus";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub value: String,
}

/// One line of a Person export file. Missing fields decode to their empty
/// values and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(rename = "__id__", default)]
    pub id: String,
    #[serde(default)]
    pub identifier: Vec<Identifier>,
}

impl Person {
    pub fn scopus_ids(&self) -> impl Iterator<Item = &str> {
        self.identifier
            .iter()
            .filter(|id| id.scheme == SCOPUS_SCHEME)
            .map(|id| id.value.as_str())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ({})", self.family_name, self.given_name, self.id)?;
        for id in &self.identifier {
            write!(f, " [{}:{}]", id.scheme, id.value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
}

/// The slice of the ORCID search response this tool cares about.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "num-found", default)]
    pub num_found: i64,
}
