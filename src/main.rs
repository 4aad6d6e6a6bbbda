use eframe::egui;
use terms_highlighter::logging;
use terms_highlighter::page::TermsPageApp;

fn main() -> anyhow::Result<()> {
    logging::init(cfg!(debug_assertions));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Terms Highlighter",
        native_options,
        Box::new(|_cc| Box::new(TermsPageApp::default())),
    )
    .map_err(|err| anyhow::anyhow!("viewer exited with error: {err}"))?;

    Ok(())
}
