//! GitHub REST transport.
//!
//! Commands talk to the [`Transport`] trait; [`GitHubClient`] is the real
//! implementation over `reqwest`. Payloads are returned as raw JSON and turned
//! into typed records by [`crate::model`].

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

use crate::config::{display_config_path, Config, Credentials};
use crate::error::{GhiError, Result};

/// Items requested per page when listing.
pub const PAGE_SIZE: usize = 100;
/// Listing stops after this many pages even if more remain.
pub const MAX_PAGES: usize = 19;

/// Query string parameters.
pub type Params = [(&'static str, String)];

/// The REST operations the commands need.
pub trait Transport {
    /// GET, expecting `200 OK`.
    fn get(&self, path: &str, params: &Params) -> Result<Value>;

    /// PATCH with a JSON body, expecting `200 OK`. Needs credentials.
    fn patch(&self, path: &str, payload: &Value) -> Result<Value>;

    /// POST with a JSON body, expecting `201 Created`. Needs credentials.
    fn post(&self, path: &str, payload: &Value) -> Result<Value>;

    /// GET every page of a list endpoint, up to [`MAX_PAGES`].
    ///
    /// Stops at the first empty page.
    fn get_pages(&self, path: &str, params: &Params) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        for page in 1..=MAX_PAGES {
            let mut paged: Vec<(&'static str, String)> = params.to_vec();
            paged.push(("per_page", PAGE_SIZE.to_string()));
            paged.push(("page", page.to_string()));

            let batch = match self.get(path, &paged)? {
                Value::Array(batch) => batch,
                other => {
                    return Err(GhiError::InvalidPayload(format!(
                        "expected a list from {}, got {}",
                        path,
                        kind(&other)
                    )))
                }
            };
            if batch.is_empty() {
                break;
            }
            items.extend(batch);
        }
        Ok(items)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Blocking GitHub REST client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ghi/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            credentials: config.credentials(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(c) => request.basic_auth(&c.username, Some(&c.token)),
            None => request,
        }
    }

    fn require_credentials(&self) -> Result<()> {
        if self.credentials.is_none() {
            return Err(GhiError::Unauthorized(display_config_path()));
        }
        Ok(())
    }

    fn send(&self, method: &str, path: &str, request: RequestBuilder, expected: StatusCode) -> Result<Value> {
        let started = Instant::now();
        let response = self
            .authorize(request)
            .header("Accept", "application/vnd.github+json")
            .send()?;

        let status = response.status();
        debug!(
            "{} {} -> {} ({} ms)",
            method,
            path,
            status.as_u16(),
            started.elapsed().as_millis()
        );

        if status != expected {
            return Err(GhiError::Status(status.as_u16()));
        }

        Ok(response.json()?)
    }
}

impl Transport for GitHubClient {
    fn get(&self, path: &str, params: &Params) -> Result<Value> {
        let request = self.client.get(self.endpoint(path)).query(params);
        self.send("GET", path, request, StatusCode::OK)
    }

    fn patch(&self, path: &str, payload: &Value) -> Result<Value> {
        self.require_credentials()?;
        let request = self.client.patch(self.endpoint(path)).json(payload);
        self.send("PATCH", path, request, StatusCode::OK)
    }

    fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        self.require_credentials()?;
        let request = self.client.post(self.endpoint(path)).json(payload);
        self.send("POST", path, request, StatusCode::CREATED)
    }
}
