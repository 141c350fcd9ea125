use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use api_client::ClientError;
use api_protocol::{Flight, SearchQuery};

use crate::db::Provider;

/// Outcome messages sent from the worker threads back to the UI thread.
/// Every event carries the sequence id of the search that produced it, so
/// the view can discard outcomes of superseded searches.
pub enum SearchEvent {
    Flights {
        seq: u64,
        result: Result<Vec<Flight>, ClientError>,
    },
    Countries {
        seq: u64,
        origin: Result<String, ClientError>,
        destination: Result<String, ClientError>,
    },
}

impl SearchEvent {
    pub fn seq(&self) -> u64 {
        match self {
            SearchEvent::Flights { seq, .. } | SearchEvent::Countries { seq, .. } => *seq,
        }
    }
}

/// Runs searches on background threads and reports back over a channel.
///
/// A new search never cancels a running one; whichever outcomes arrive for
/// a superseded search are dropped by the sequence check on the receiving
/// side.
pub struct SearchWorker<P: Provider> {
    provider: Arc<P>,
    events: Sender<SearchEvent>,
    ctx: egui::Context,
}

impl<P: Provider> SearchWorker<P> {
    pub fn new(provider: Arc<P>, events: Sender<SearchEvent>, ctx: egui::Context) -> Self {
        Self {
            provider,
            events,
            ctx,
        }
    }

    /// Issues the flight search for `query` and, if it succeeds, both
    /// country lookups. All events are tagged with `seq`.
    pub fn spawn_search(&self, seq: u64, query: SearchQuery) {
        let provider = Arc::clone(&self.provider);
        let events = self.events.clone();
        let ctx = self.ctx.clone();

        thread::spawn(move || {
            let result = provider.search_flights(&query);
            let search_succeeded = result.is_ok();

            if events.send(SearchEvent::Flights { seq, result }).is_err() {
                // The app is gone, nobody is listening anymore.
                return;
            }
            ctx.request_repaint();

            if !search_succeeded {
                return;
            }

            // The lookups run even for an empty result set, keyed on the
            // codes as they were submitted.
            let (origin, destination) =
                lookup_countries(&provider, &query.origin, &query.destination);

            if events
                .send(SearchEvent::Countries {
                    seq,
                    origin,
                    destination,
                })
                .is_ok()
            {
                ctx.request_repaint();
            }
        });
    }
}

/// Resolves both countries on parallel threads and joins them. One side
/// failing never blocks the other.
fn lookup_countries<P: Provider>(
    provider: &Arc<P>,
    origin: &str,
    destination: &str,
) -> (Result<String, ClientError>, Result<String, ClientError>) {
    let origin_handle = spawn_lookup(provider, origin);
    let destination_handle = spawn_lookup(provider, destination);

    (join_lookup(origin_handle), join_lookup(destination_handle))
}

fn spawn_lookup<P: Provider>(
    provider: &Arc<P>,
    iata: &str,
) -> thread::JoinHandle<Result<String, ClientError>> {
    let provider = Arc::clone(provider);
    let iata = iata.to_string();

    thread::spawn(move || provider.lookup_location(&iata).map(|info| info.country))
}

fn join_lookup(handle: thread::JoinHandle<Result<String, ClientError>>) -> Result<String, ClientError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(ClientError::Connection("lookup thread panicked".to_string())))
}
