use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::Result;

/// Create a blocking HTTP client bounded by `timeout`, or unbounded for `None`.
///
/// The blocking client applies a 30 second default when no timeout is set,
/// so `None` is passed through explicitly to disable it.
pub fn create_http_client(timeout: Option<Duration>) -> Result<Client> {
    debug!("Creating HTTP client (timeout: {:?})", timeout);

    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;

    Ok(client)
}
