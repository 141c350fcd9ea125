use api_protocol::Flight;
use chrono::{DateTime, Local, Utc};
use egui_extras::{Column, TableBuilder};

use crate::state::ViewState;

use super::View;

/// The "Available Flights" section: resolved countries and the result
/// table, or the placeholder when there is nothing to show.
pub struct WidgetFlightsTable<'a> {
    state: &'a ViewState,
}

impl<'a> WidgetFlightsTable<'a> {
    pub fn new(state: &'a ViewState) -> Self {
        Self { state }
    }
}

impl View for WidgetFlightsTable<'_> {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Available Flights");

        if let Some(country) = &self.state.origin_country {
            ui.label(format!("Origin country: {}", country));
        }
        if let Some(country) = &self.state.destination_country {
            ui.label(format!("Destination country: {}", country));
        }

        if self.state.flights.is_empty() {
            ui.label("No flights available.");
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder().at_least(130.0))
            .column(Column::remainder().at_least(130.0))
            .column(Column::auto().at_least(80.0))
            .header(25.0, |mut header| {
                for title in ["Flight Number", "Airline", "Departure", "Arrival", "Price (USD)"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for flight in &self.state.flights {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&flight.flight_number);
                        });
                        row.col(|ui| {
                            ui.label(&flight.airline);
                        });
                        row.col(|ui| {
                            ui.label(format_local(flight.departure_date));
                        });
                        row.col(|ui| {
                            ui.label(format_local(flight.arrival_date));
                        });
                        row.col(|ui| {
                            ui.label(format_price(flight.price));
                        });
                    });
                }
            });
    }
}

/// Timestamps come in as UTC and are shown in the viewer's local time.
fn format_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Whole-dollar prices render without a decimal part, as in `$650`.
fn format_price(price: f64) -> String {
    format!("${}", price)
}
