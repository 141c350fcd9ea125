use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a `POST /api/flights` request. The IATA codes and the date go
/// out exactly as the user entered them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
}

/// One bookable itinerary segment returned by the search endpoint.
///
/// The backend uses camelCase field names and RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_number: String,
    pub airline: String,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub price: f64,
}
