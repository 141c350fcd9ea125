use api_protocol::SearchQuery;
use chrono::NaiveDate;

use super::View;

/// The three query fields and the submit button. IATA codes go out as
/// typed, without validation; the date picker only produces real calendar
/// dates.
pub struct WidgetSearchForm {
    origin: String,
    destination: String,
    date: NaiveDate,
    submitted: bool,
}

impl WidgetSearchForm {
    pub fn new() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            date: chrono::offset::Utc::now().date_naive(),
            submitted: false,
        }
    }

    /// True once per click of the search button.
    pub fn take_submitted(&mut self) -> bool {
        std::mem::take(&mut self.submitted)
    }

    /// The query as it will go out on the wire.
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            date: self.date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Default for WidgetSearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl View for WidgetSearchForm {
    fn ui(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("search_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Origin Airport (IATA Code):");
                ui.add(egui::TextEdit::singleline(&mut self.origin).hint_text("e.g., JFK"));
                ui.end_row();

                ui.label("Destination Airport (IATA Code):");
                ui.add(egui::TextEdit::singleline(&mut self.destination).hint_text("e.g., LHR"));
                ui.end_row();

                ui.label("Departure Date:");
                ui.add(egui_extras::DatePickerButton::new(&mut self.date));
                ui.end_row();
            });

        ui.add_space(8.0);

        // The button stays enabled while a search is running; overlapping
        // submissions race and the stale one loses on arrival.
        if ui.button("Find Flights").clicked() {
            self.submitted = true;
        }
    }
}
