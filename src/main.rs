// Week Scheduler Application
// Main entry point

use week_scheduler::ui_egui::SchedulerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Week Scheduler");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Week Scheduler")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Week Scheduler",
        options,
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc)))),
    )
}
