mod flights_table;
mod search_form;

pub use flights_table::WidgetFlightsTable;
pub use search_form::WidgetSearchForm;

pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui);
}
