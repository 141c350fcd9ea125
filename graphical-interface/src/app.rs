use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use logger::Logger;

use crate::db::Provider;
use crate::fetch::{SearchEvent, SearchWorker};
use crate::state::ViewState;
use crate::widgets::{View, WidgetFlightsTable, WidgetSearchForm};

/// The Search Form & Results View. One component owns the whole workflow:
/// form input, the background search, and the rendered outcome.
pub struct MyApp<P: Provider> {
    form: WidgetSearchForm,
    state: ViewState,
    worker: SearchWorker<P>,
    events: Receiver<SearchEvent>,
    logger: Logger,
}

impl<P: Provider> MyApp<P> {
    pub fn new(egui_ctx: egui::Context, provider: P) -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            form: WidgetSearchForm::new(),
            state: ViewState::new(),
            worker: SearchWorker::new(Arc::new(provider), tx, egui_ctx),
            events: rx,
            logger: Logger::stderr(),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.log_failures(&event);
            self.state.apply(event);
        }
    }

    // Failures reach the user as the generic message or the "Unknown"
    // sentinel; the detail only goes to the developer console.
    fn log_failures(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::Flights {
                result: Err(e), ..
            } => {
                self.logger.error(&format!("flight search failed: {}", e));
            }
            SearchEvent::Flights { .. } => {}
            SearchEvent::Countries {
                origin,
                destination,
                ..
            } => {
                if let Err(e) = origin {
                    self.logger
                        .warn(&format!("origin country lookup failed: {}", e));
                }
                if let Err(e) = destination {
                    self.logger
                        .warn(&format!("destination country lookup failed: {}", e));
                }
            }
        }
    }
}

impl<P: Provider> eframe::App for MyApp<P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Travel Planner Hub");
            ui.add_space(10.0);

            self.form.ui(ui);

            if self.form.take_submitted() {
                let seq = self.state.begin_search();
                self.worker.spawn_search(seq, self.form.query());
            }

            ui.add_space(10.0);

            if self.state.loading {
                ui.label("Loading...");
            }

            if let Some(error) = &self.state.error {
                ui.colored_label(egui::Color32::RED, error.as_str());
            }

            ui.add_space(10.0);

            WidgetFlightsTable::new(&self.state).ui(ui);
        });
    }
}
