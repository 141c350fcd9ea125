//! Blocking HTTP driver for the travel backend.
//!
//! One method per endpoint; both POST a JSON body and decode a JSON
//! response. Callers decide what to do with a [`ClientError`], the driver
//! itself never retries and never logs.

mod error;

pub use error::ClientError;

use std::time::Duration;

use api_protocol::{Flight, LocationInfo, LocationQuery, SearchQuery};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`,
    /// e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Searches flights matching `query`.
    pub fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>, ClientError> {
        self.post("/api/flights", query)
    }

    /// Resolves the country for one IATA airport code.
    pub fn lookup_location(&self, iata: &str) -> Result<LocationInfo, ClientError> {
        let query = LocationQuery {
            iata: iata.to_string(),
        };

        self.post("/api/location", &query)
    }

    fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
