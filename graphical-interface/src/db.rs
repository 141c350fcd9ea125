use api_client::{ApiClient, ClientError};
use api_protocol::{Flight, LocationInfo, SearchQuery};

/// Backend seam used by the app. Tests stand in for the network here.
pub trait Provider: Send + Sync + 'static {
    fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>, ClientError>;
    fn lookup_location(&self, iata: &str) -> Result<LocationInfo, ClientError>;
}

/// The real backend, reached over HTTP.
pub struct Db {
    client: ApiClient,
}

impl Db {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Provider for Db {
    fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>, ClientError> {
        self.client.search_flights(query)
    }

    fn lookup_location(&self, iata: &str) -> Result<LocationInfo, ClientError> {
        self.client.lookup_location(iata)
    }
}
