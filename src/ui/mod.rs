pub mod cards;
pub mod panels;
pub mod plot;
pub mod table;

use eframe::egui::Color32;
use ratio_dash::color::Color;

pub fn to_color32(c: Color) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}
