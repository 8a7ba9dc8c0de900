use crate::domain::model::{AccessToken, SearchResult};
use crate::orcid::throttle::FixedDelay;
use crate::utils::error::{CheckError, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

const ORCID_JSON: &str = "application/vnd.orcid+json";

/// A search response, keeping the raw body around because matches are
/// reported verbatim.
#[derive(Debug, Clone)]
pub struct LookupResponse {
    pub result: SearchResult,
    pub body: String,
}

/// Client for the ORCID OAuth token endpoint and public search API.
pub struct OrcidClient {
    http: Client,
    token_url: String,
    api_url: String,
    throttle: FixedDelay,
}

impl OrcidClient {
    pub fn new(token_url: String, api_url: String, throttle: FixedDelay) -> Self {
        Self {
            http: Client::new(),
            token_url,
            api_url,
            throttle,
        }
    }

    /// OAuth2 client-credentials exchange for a public read token.
    pub async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AccessToken> {
        tracing::debug!("Requesting access token from {}", self.token_url);

        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "client_credentials"),
            ("scope", "/read-public"),
        ];

        let response = self.http.post(&self.token_url).form(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::error!("Unable to get access token from API.");
            return Err(CheckError::ApiStatusError {
                endpoint: "token",
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Searches ORCID profiles claiming the given Scopus author ID
    /// (`eid-self` field). Pauses for the throttle interval after the
    /// request, whether it succeeded or not.
    pub async fn search_scopus_id(
        &self,
        token: &AccessToken,
        scopus_id: &str,
    ) -> Result<LookupResponse> {
        let outcome = self.execute_search(token, scopus_id).await;
        self.throttle.pause().await;
        outcome
    }

    async fn execute_search(
        &self,
        token: &AccessToken,
        scopus_id: &str,
    ) -> Result<LookupResponse> {
        let url = format!("{}/search/", self.api_url.trim_end_matches('/'));
        tracing::debug!("Searching eid-self:{} at {}", scopus_id, url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", format!("eid-self:{}", scopus_id))])
            .header(ACCEPT, ORCID_JSON)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::error!("Bad HTTP status from API.");
            return Err(CheckError::ApiStatusError {
                endpoint: "search",
                status: status.as_u16(),
                body,
            });
        }

        let result: SearchResult = serde_json::from_str(&body)?;
        Ok(LookupResponse { result, body })
    }
}
