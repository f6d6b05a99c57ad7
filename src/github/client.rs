use crate::error::{OctoviewError, Result};
use crate::github::types::UserProfile;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

/// Builds the shared HTTP client. The GitHub API rejects requests without a
/// User-Agent header.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("octoview"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    Ok(Client::builder().default_headers(headers).build()?)
}

/// One unauthenticated GET against the users endpoint. No retry, no timeout;
/// the caller suspends until the round-trip completes.
pub async fn fetch_user(client: &Client, api_url: &str, username: &str) -> Result<UserProfile> {
    let url = format!("{api_url}/users/{username}");

    let response = client.get(&url).send().await?;

    // Any non-2xx is the same failure; 404 gets no special treatment.
    let status = response.status();
    if !status.is_success() {
        return Err(OctoviewError::Http(status));
    }

    let body = response.text().await?;
    parse_profile(&body)
}

pub fn parse_profile(body: &str) -> Result<UserProfile> {
    Ok(serde_json::from_str(body)?)
}
