//! Shared color constants for the UI.

use egui::Color32;
use userboard_business::BadgeStyle;

/// Red color for the danger badge and destructive actions.
pub const COLOR_DANGER: Color32 = Color32::from_rgb(220, 53, 69);

/// Blue color for the primary badge.
pub const COLOR_PRIMARY: Color32 = Color32::from_rgb(0, 123, 255);

/// Amber color for the warning badge (carries dark text).
pub const COLOR_WARNING: Color32 = Color32::from_rgb(255, 193, 7);

/// Green color for the success badge.
pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(40, 167, 69);

/// Gray color for the secondary badge and unknown fallbacks.
pub const COLOR_SECONDARY: Color32 = Color32::from_rgb(108, 117, 125);

/// Near-black used on light badge fills.
pub const COLOR_DARK_TEXT: Color32 = Color32::from_rgb(33, 37, 41);

/// Fill color for a badge style.
pub fn badge_fill(style: BadgeStyle) -> Color32 {
    match style {
        BadgeStyle::Danger => COLOR_DANGER,
        BadgeStyle::Primary => COLOR_PRIMARY,
        BadgeStyle::Warning => COLOR_WARNING,
        BadgeStyle::Success => COLOR_SUCCESS,
        BadgeStyle::Secondary => COLOR_SECONDARY,
    }
}

/// Text color for a badge style.
pub fn badge_text(style: BadgeStyle) -> Color32 {
    if style.dark_text() {
        COLOR_DARK_TEXT
    } else {
        Color32::WHITE
    }
}
