mod app;
mod assets;
mod content;
mod navigation;
mod reveal;
mod section;
mod settings;
mod state;
mod theme;
mod visibility;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = settings::load();
    log::info!(
        "starting portfolio viewer (threshold {}, bottom margin {})",
        settings.threshold,
        settings.bottom_margin
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mohit Rajput | Portfolio",
        native_options,
        Box::new(move |cc| Box::new(app::PortfolioApp::new(cc, settings))),
    )?;
    Ok(())
}
