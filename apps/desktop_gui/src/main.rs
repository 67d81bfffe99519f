use std::path::PathBuf;

mod backend_bridge;
mod config;
mod content;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PortfolioApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop portfolio viewer")]
struct Args {
    /// Settings file with API and profile overrides.
    #[arg(long, default_value = config::DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    /// Overrides the portfolio API base URL from any other source.
    #[arg(long)]
    api_base_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = config::load_settings(&args.config);
    if let Some(base_url) = args.api_base_url {
        settings.api_base_url = client_core::normalize_base_url(base_url);
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings.api_base_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio Desktop")
            .with_inner_size([1180.0, 800.0])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio Desktop",
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(cmd_tx, ui_rx, settings)))),
    )
}
