use crate::config::SourceConfig;
use crate::error::{Result, ScraperError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Build the blocking client used for the register fetch.
///
/// Redirect handling is reqwest's default. There is no timeout unless
/// `timeout_seconds` is configured.
pub fn build_client(source: &SourceConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(user_agent) = &source.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    if let Some(secs) = source.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// GET `url` once and return the body. Anything but 200 is an error.
#[instrument(skip(client))]
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    info!("Fetching advocates register");

    let response = client.get(url).send()?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScraperError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text()?;
    debug!(bytes = body.len(), "Received register page");
    Ok(body)
}
