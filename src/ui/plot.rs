use std::ops::RangeInclusive;

use eframe::egui::{Align2, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use ratio_dash::color::FillPattern;
use ratio_dash::projection::{ChartView, SparklineView, NO_DATA};

use super::to_color32;

/// Share of each year slot covered by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

/// Lightness added to the fill of hatched bars.
const HATCH_LIGHTEN: f32 = 0.25;

/// Axis formatter that prints year labels at integer positions.
fn year_axis(
    categories: Vec<(i32, String)>,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        categories
            .get(idx as usize)
            .map(|(_, label)| label.clone())
            .unwrap_or_default()
    }
}

fn slot_of(categories: &[(i32, String)], year: i32) -> Option<usize> {
    categories.iter().position(|(y, _)| *y == year)
}

// ---------------------------------------------------------------------------
// Grouped bar chart (central panel)
// ---------------------------------------------------------------------------

/// Bars for every series side by side inside each year slot. Absent values
/// leave an empty slot marked with the no-data label, so the year stays on
/// the axis.
pub fn main_chart(ui: &mut Ui, chart: &ChartView) {
    let categories = chart.categories();
    let bar_width = GROUP_WIDTH / chart.series.len().max(1) as f64;

    ui.strong(&chart.title);
    Plot::new("main_chart")
        .legend(Legend::default())
        .height(360.0)
        .x_axis_label("Year")
        .y_axis_label("Value")
        .x_axis_formatter(year_axis(categories.clone()))
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for (s_idx, series) in chart.series.iter().enumerate() {
                let base = to_color32(series.style.color);
                let (fill, stroke) = match series.style.pattern {
                    FillPattern::Solid => (base, Stroke::new(1.0, base)),
                    FillPattern::Hatched => (
                        to_color32(series.style.color.lightened(HATCH_LIGHTEN)),
                        Stroke::new(2.0, base),
                    ),
                };
                let offset = (s_idx as f64 + 0.5) * bar_width - GROUP_WIDTH / 2.0;

                let mut bars = Vec::with_capacity(series.points.len());
                for point in &series.points {
                    let Some(slot) = slot_of(&categories, point.year) else {
                        continue;
                    };
                    let x = slot as f64 + offset;
                    match point.value {
                        Some(v) => {
                            bars.push(
                                Bar::new(x, v)
                                    .width(bar_width * 0.95)
                                    .fill(fill)
                                    .stroke(stroke)
                                    .name(format!("{} {}", series.label, point.year_label)),
                            );
                            plot_ui.text(
                                Text::new(PlotPoint::new(x, v), RichText::new(&point.text).small())
                                    .anchor(Align2::CENTER_BOTTOM),
                            );
                        }
                        None => {
                            plot_ui.text(
                                Text::new(PlotPoint::new(x, 0.0), RichText::new(NO_DATA).strong())
                                    .color(base)
                                    .anchor(Align2::CENTER_BOTTOM),
                            );
                        }
                    }
                }

                plot_ui.bar_chart(BarChart::new(bars).name(&series.label).color(base));
            }
        });
}

// ---------------------------------------------------------------------------
// Sparkline
// ---------------------------------------------------------------------------

/// Line per company, broken wherever a value is absent.
pub fn sparkline(ui: &mut Ui, spark: &SparklineView) {
    let categories = spark.categories();

    ui.strong(&spark.title);
    Plot::new("sparkline")
        .legend(Legend::default())
        .height(200.0)
        .x_axis_formatter(year_axis(categories.clone()))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for series in &spark.series {
                let color = to_color32(series.style.color);

                let mut segments: Vec<Vec<[f64; 2]>> = vec![Vec::new()];
                for point in &series.points {
                    let Some(slot) = slot_of(&categories, point.year) else {
                        continue;
                    };
                    match point.value {
                        Some(v) => {
                            if let Some(seg) = segments.last_mut() {
                                seg.push([slot as f64, v]);
                            }
                        }
                        None => segments.push(Vec::new()),
                    }
                }

                for seg in segments.into_iter().filter(|s| !s.is_empty()) {
                    let markers: PlotPoints = seg.iter().copied().collect();
                    plot_ui.points(Points::new(markers).radius(3.0).color(color).name(&series.label));
                    let line: PlotPoints = seg.into_iter().collect();
                    plot_ui.line(Line::new(line).color(color).width(2.0).name(&series.label));
                }
            }
        });
}
