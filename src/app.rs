use eframe::egui::{self, ScrollArea, Ui};
use ratio_dash::DashboardState;

use crate::ui::{cards, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RatioDashApp {
    pub state: DashboardState,
}

impl RatioDashApp {
    pub fn new(state: DashboardState) -> Self {
        Self { state }
    }
}

impl eframe::App for RatioDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selection ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: trend and data ----
        egui::SidePanel::right("trend_panel")
            .default_width(380.0)
            .resizable(true)
            .show(ctx, |ui| {
                let views = self.state.views();
                ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                    ui.heading("Mini-trend & data");
                    plot::sparkline(ui, &views.sparkline);
                    ui.add_space(12.0);
                    table::data_table(ui, &views.table);
                });
            });

        // ---- Central panel: KPIs, insights, main chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let views = self.state.views();
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                cards::kpi_cards(ui, &views.kpis, views.selection.company);
                ui.add_space(12.0);
                cards::insights(ui, &views.insights);
                ui.add_space(12.0);
                plot::main_chart(ui, &views.chart);
            });
        });
    }
}
