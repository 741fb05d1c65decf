//! Colored badge for role and status values.

use egui::{Frame, Margin, Response, RichText, Ui};
use userboard_business::BadgeStyle;

use crate::utils::colors::{badge_fill, badge_text};

/// Render a small filled badge with the style's colors.
pub fn badge(ui: &mut Ui, style: BadgeStyle, label: &str) -> Response {
    Frame::NONE
        .fill(badge_fill(style))
        .inner_margin(Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(badge_text(style)).small());
        })
        .response
}
