use eframe::egui::{self, Color32, RichText, Ui};
use ratio_dash::{CompanySelection, DashboardState};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Every change goes through the state setters
/// so the views are recomputed once per interaction.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Company ----
    ui.strong("Company");
    let current = state.selection().company;
    let mut chosen = current;
    egui::ComboBox::from_id_salt("company_select")
        .selected_text(current.label())
        .width(200.0)
        .show_ui(ui, |ui: &mut Ui| {
            for option in CompanySelection::OPTIONS {
                ui.selectable_value(&mut chosen, option, option.label());
            }
        });
    if chosen != current {
        if let Err(e) = state.set_company(chosen) {
            log::warn!("Company change rejected: {e}");
        }
    }
    ui.add_space(8.0);

    // ---- Metric group ----
    // Clone what we need so we can mutate state after the combo box closes.
    let groups: Vec<(String, String)> = state
        .catalogs()
        .metrics
        .groups()
        .iter()
        .map(|g| (g.key.clone(), g.label.clone()))
        .collect();
    let current_group = state.selection().group.clone();
    let current_label = groups
        .iter()
        .find(|(key, _)| *key == current_group)
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| current_group.clone());

    ui.strong("Metric group");
    let mut chosen_group = current_group.clone();
    egui::ComboBox::from_id_salt("metric_group")
        .selected_text(current_label)
        .width(200.0)
        .show_ui(ui, |ui: &mut Ui| {
            for (key, label) in &groups {
                ui.selectable_value(&mut chosen_group, key.clone(), label);
            }
        });
    if chosen_group != current_group {
        if let Err(e) = state.set_group(&chosen_group) {
            log::warn!("Metric group change rejected: {e}");
        }
    }
    ui.add_space(8.0);

    // ---- Year range ----
    ui.strong("Year range");
    let (lo, hi) = state.dataset().year_bounds();
    let range = state.selection().year_range;
    let (mut from, mut to) = (range.min(), range.max());
    ui.add(egui::Slider::new(&mut from, lo..=hi).text("from"));
    ui.add(egui::Slider::new(&mut to, lo..=hi).text("to"));

    if (from, to) != (range.min(), range.max()) {
        // Dragging one handle past the other pushes the other along.
        if from > to {
            if from != range.min() {
                to = from;
            } else {
                from = to;
            }
        }
        if let Err(e) = state.set_year_range(from, to) {
            log::warn!("Year range change rejected: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &DashboardState) {
    let (lo, hi) = state.dataset().year_bounds();
    ui.add_space(4.0);
    ui.heading("Financial Dashboard — Ambuja Cements vs UltraTech Cement");
    ui.horizontal(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!(
                "Compare liquidity, profitability, leverage, and turnover metrics ({} → {}).",
                ratio_dash::data::model::year_label(lo),
                ratio_dash::data::model::year_label(hi)
            ))
            .color(Color32::GRAY),
        );
        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
    ui.add_space(4.0);
}
