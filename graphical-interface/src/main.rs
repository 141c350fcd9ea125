use api_client::ApiClient;
use graphical_interface::app::MyApp;
use graphical_interface::db::Db;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

fn main() -> Result<(), eframe::Error> {
    // Optional first argument overrides the backend address.
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = match ApiClient::new(&base_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create the API client: {}", e);
            std::process::exit(1);
        }
    };

    eframe::run_native(
        "Travel Planner Hub",
        Default::default(),
        Box::new(move |cc| Ok(Box::new(MyApp::new(cc.egui_ctx.clone(), Db::new(client))))),
    )
}
