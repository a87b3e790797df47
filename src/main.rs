mod app;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use app::RatioDashApp;
use eframe::egui;
use ratio_dash::data::constants::builtin_dataset;
use ratio_dash::{Catalogs, DashboardState};

fn main() -> Result<()> {
    env_logger::init();

    let dataset = builtin_dataset().context("building the ratio dataset")?;
    let catalogs = Catalogs::builtin().context("building the metric catalogs")?;
    let state = DashboardState::new(Arc::new(dataset), Arc::new(catalogs))
        .context("computing the initial dashboard views")?;
    log::info!("Dashboard ready with selection {:?}", state.selection());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ratio Dash – Ambuja vs UltraTech",
        options,
        Box::new(move |_cc| Ok(Box::new(RatioDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
