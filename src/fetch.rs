//! Responsible for fetching and parsing JSON from the upstream APIs
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{info_span, Instrument};

/// Performs a single GET against the given URL and parses the body as JSON.
/// One unconditional attempt, no retries, client default timeouts.
#[tracing::instrument(err)]
pub async fn get_json<T: DeserializeOwned>(url: Url) -> Result<T, GetJsonError> {
    let response = reqwest::get(url)
        .instrument(info_span!("Fetching json"))
        .await?
        .error_for_status()?;

    let body = response
        .text()
        .instrument(info_span!("Reading body of response"))
        .await?;

    let parsed = serde_json::from_str(&body).map_err(|e| GetJsonError::ParsingError {
        source: e,
        body,
    })?;

    Ok(parsed)
}

#[derive(thiserror::Error, Debug)]
pub enum GetJsonError {
    #[error("error performing the request \n{0}")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("error parsing the response body \n{} \n{}", source, body)]
    ParsingError {
        source: serde_json::Error,
        body: String,
    },
}
