use api_protocol::Flight;

use crate::fetch::SearchEvent;

/// The one user-facing message for a failed flight search. Error detail
/// goes to the developer console only.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to fetch flight data. Please try again.";

/// Sentinel shown for a country whose lookup failed.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Everything the view shows below the form. Owned by the UI thread and
/// mutated only there: by the user submitting, and by search events drained
/// from the worker channel.
pub struct ViewState {
    pub flights: Vec<Flight>,
    pub origin_country: Option<String>,
    pub destination_country: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    latest_seq: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            flights: Vec::new(),
            origin_country: None,
            destination_country: None,
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }

    /// Starts a new search: clears the previous outcome, raises the loading
    /// flag and returns the sequence id for the new request.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_seq += 1;
        self.flights.clear();
        self.origin_country = None;
        self.destination_country = None;
        self.error = None;
        self.loading = true;
        self.latest_seq
    }

    /// Applies a search event. Events from any search but the latest are
    /// discarded, so a slow response never overwrites a newer one.
    pub fn apply(&mut self, event: SearchEvent) {
        if event.seq() != self.latest_seq {
            return;
        }

        match event {
            SearchEvent::Flights { result, .. } => {
                match result {
                    Ok(flights) => self.flights = flights,
                    Err(_) => {
                        self.flights.clear();
                        self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
                    }
                }
                self.loading = false;
            }
            SearchEvent::Countries {
                origin,
                destination,
                ..
            } => {
                self.origin_country = Some(country_or_unknown(origin));
                self.destination_country = Some(country_or_unknown(destination));
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn country_or_unknown<E>(result: Result<String, E>) -> String {
    result.unwrap_or_else(|_| UNKNOWN_COUNTRY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use api_client::ClientError;
    use chrono::{TimeZone, Utc};

    fn sample_flight() -> Flight {
        Flight {
            flight_number: "BA112".to_string(),
            airline: "British Airways".to_string(),
            departure_date: Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap(),
            arrival_date: Utc.with_ymd_and_hms(2024, 5, 2, 6, 0, 0).unwrap(),
            price: 650.0,
        }
    }

    fn flights_event(seq: u64, result: Result<Vec<Flight>, ClientError>) -> SearchEvent {
        SearchEvent::Flights { seq, result }
    }

    #[test]
    fn begin_search_resets_the_previous_outcome() {
        let mut state = ViewState::new();

        let first = state.begin_search();
        state.apply(flights_event(first, Ok(vec![sample_flight()])));
        state.apply(SearchEvent::Countries {
            seq: first,
            origin: Ok("United States".to_string()),
            destination: Ok("United Kingdom".to_string()),
        });
        assert!(!state.flights.is_empty());

        let second = state.begin_search();
        assert_eq!(second, first + 1);
        assert!(state.flights.is_empty());
        assert!(state.origin_country.is_none());
        assert!(state.destination_country.is_none());
        assert!(state.error.is_none());
        assert!(state.loading);
    }

    #[test]
    fn successful_flights_event_stores_results_and_clears_loading() {
        let mut state = ViewState::new();
        let seq = state.begin_search();

        state.apply(flights_event(seq, Ok(vec![sample_flight()])));

        assert_eq!(state.flights, vec![sample_flight()]);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_flights_event_sets_the_generic_message() {
        let mut state = ViewState::new();
        let seq = state.begin_search();

        state.apply(flights_event(seq, Err(ClientError::Status(500))));

        assert!(state.flights.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(SEARCH_ERROR_MESSAGE));
    }

    #[test]
    fn stale_events_are_discarded() {
        let mut state = ViewState::new();
        let stale = state.begin_search();
        let latest = state.begin_search();

        // The older search answers after the newer one was issued.
        state.apply(flights_event(stale, Ok(vec![sample_flight()])));
        assert!(state.flights.is_empty());
        assert!(state.loading);

        state.apply(SearchEvent::Countries {
            seq: stale,
            origin: Ok("United States".to_string()),
            destination: Ok("United Kingdom".to_string()),
        });
        assert!(state.origin_country.is_none());

        // The latest search still lands normally.
        state.apply(flights_event(latest, Ok(Vec::new())));
        assert!(!state.loading);
    }

    #[test]
    fn failed_lookup_degrades_to_unknown_per_field() {
        let mut state = ViewState::new();
        let seq = state.begin_search();
        state.apply(flights_event(seq, Ok(vec![sample_flight()])));

        state.apply(SearchEvent::Countries {
            seq,
            origin: Err(ClientError::Status(404)),
            destination: Ok("United Kingdom".to_string()),
        });

        assert_eq!(state.origin_country.as_deref(), Some(UNKNOWN_COUNTRY));
        assert_eq!(
            state.destination_country.as_deref(),
            Some("United Kingdom")
        );
        // The flights stay on screen, a degraded lookup is not an error.
        assert!(!state.flights.is_empty());
        assert!(state.error.is_none());
    }
}
