//! Profile lookup against the Mojang account directory.
//!
//! One blocking GET per name. The client doesn't interpret profiles beyond
//! the `id` field; callers get back a normalized UUID or nothing.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.mojang.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Lookup capability: who owns `name` at unix time `at`?
///
/// `Ok(None)` means the directory has no current owner for the name (the
/// account has since renamed away from it). Implemented by [`MojangClient`]
/// in production and by stubs in tests.
pub trait ProfileLookup {
    fn lookup(&self, name: &str, at: u64) -> Result<Option<Uuid>>;
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: String,
}

/// HTTP client for the profile-lookup endpoint.
pub struct MojangClient {
    client: Client,
    base_url: String,
}

impl MojangClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::lookup_request_failed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl ProfileLookup for MojangClient {
    fn lookup(&self, name: &str, at: u64) -> Result<Option<Uuid>> {
        let url = format!(
            "{}/users/profiles/minecraft/{}?at={}",
            self.base_url, name, at
        );

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::lookup_request_failed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::lookup_request_failed(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::lookup_service_error(status.as_u16(), body));
        }

        // An empty body is the directory's "no current owner for this name".
        if body.is_empty() {
            return Ok(None);
        }

        let profile: ProfileResponse = serde_json::from_str(&body).map_err(|e| {
            Error::lookup_invalid_response(format!("Invalid JSON response: {}", e))
        })?;

        // The API returns the id as 32 hex characters without dashes;
        // Uuid::try_parse accepts both that and the dashed form.
        let uuid = Uuid::try_parse(&profile.id).map_err(|_| {
            Error::lookup_invalid_response(format!("Profile id is not a UUID: {}", profile.id))
        })?;

        Ok(Some(uuid))
    }
}
