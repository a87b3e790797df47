use eframe::egui::{self, Color32, RichText, Ui};
use ratio_dash::projection::{format_value, Insight, Kpi};
use ratio_dash::CompanySelection;

// ---------------------------------------------------------------------------
// KPI cards – latest value per metric
// ---------------------------------------------------------------------------

pub fn kpi_cards(ui: &mut Ui, kpis: &[Kpi], company: CompanySelection) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for kpi in kpis {
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui: &mut Ui| {
                    ui.set_min_width(170.0);
                    ui.vertical(|ui: &mut Ui| {
                        ui.label(RichText::new(&kpi.metric).small());
                        if company.is_both() {
                            ui.horizontal(|ui: &mut Ui| {
                                for v in &kpi.values {
                                    ui.vertical(|ui: &mut Ui| {
                                        ui.label(
                                            RichText::new(v.company.short_name())
                                                .small()
                                                .color(Color32::GRAY),
                                        );
                                        ui.label(RichText::new(format_value(v.value, 2)).strong());
                                    });
                                }
                            });
                        } else {
                            let value = kpi.values.first().and_then(|v| v.value);
                            ui.label(RichText::new(format_value(value, 2)).size(18.0).strong());
                        }
                    });
                });
        }
    });
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

pub fn insights(ui: &mut Ui, insights: &[Insight]) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.strong("Insights for Selected Ratios");
        ui.add_space(4.0);
        for insight in insights {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.label(RichText::new(format!("{}:", insight.metric)).strong());
                ui.label(&insight.text);
            });
            ui.add_space(4.0);
        }
    });
}
