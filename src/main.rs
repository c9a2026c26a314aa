use mobile_sim::app::MobileSimApp;
use mobile_sim::constant;
use mobile_sim::ui;

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    // Optional startup URL overrides the one saved in the config
    let initial_url = std::env::args().nth(1);
    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(MobileSimApp::new(cc, initial_url)))),
    )
}
