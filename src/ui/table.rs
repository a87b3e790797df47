use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use ratio_dash::projection::{format_value, TableView};

/// Pivot grid with a button that copies the CSV text.
pub fn data_table(ui: &mut Ui, table: &TableView) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Data");
        if ui.small_button("Copy CSV").clicked() {
            ui.ctx().copy_text(table.text.clone());
        }
    });

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(60.0))
        .columns(Column::auto().at_least(70.0), table.columns.len())
        .header(34.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            for col in &table.columns {
                header.col(|ui| {
                    ui.vertical(|ui: &mut Ui| {
                        ui.label(RichText::new(col.company.short_name()).small());
                        ui.strong(&col.metric);
                    });
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(18.0, |mut cells| {
                    cells.col(|ui| {
                        ui.label(&row.year_label);
                    });
                    for cell in &row.cells {
                        cells.col(|ui| {
                            ui.monospace(format_value(*cell, 3));
                        });
                    }
                });
            }
        });
}
