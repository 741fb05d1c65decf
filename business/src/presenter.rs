//! Display lookups for roles and statuses.
//!
//! Pure, total functions over raw values: known values map to a fixed badge
//! style and label, anything else falls back to the secondary style and the
//! raw value echoed back. The UI decides what a [`BadgeStyle`] looks like.

use std::borrow::Cow;

/// Named visual category for a role or status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Red, for privileged roles.
    Danger,
    /// Blue, the default role.
    Primary,
    /// Amber with dark text.
    Warning,
    /// Green, for healthy statuses.
    Success,
    /// Gray, for inactive values and the unknown fallback.
    Secondary,
}

/// Badge style for a raw role value.
pub fn role_badge_style(role: &str) -> BadgeStyle {
    match role {
        "admin" => BadgeStyle::Danger,
        "user" => BadgeStyle::Primary,
        "moderator" => BadgeStyle::Warning,
        _ => BadgeStyle::Secondary,
    }
}

/// Display label for a raw role value; unknown values are echoed back.
pub fn role_label(role: &str) -> Cow<'_, str> {
    match role {
        "admin" => Cow::Borrowed("Administrator"),
        "user" => Cow::Borrowed("User"),
        "moderator" => Cow::Borrowed("Moderator"),
        other => Cow::Borrowed(other),
    }
}

/// Badge style for a raw status value.
pub fn status_badge_style(status: &str) -> BadgeStyle {
    match status {
        "active" => BadgeStyle::Success,
        "inactive" => BadgeStyle::Secondary,
        "pending" => BadgeStyle::Warning,
        _ => BadgeStyle::Secondary,
    }
}

/// Display label for a raw status value; unknown values are echoed back.
pub fn status_label(status: &str) -> Cow<'_, str> {
    match status {
        "active" => Cow::Borrowed("Active"),
        "inactive" => Cow::Borrowed("Inactive"),
        "pending" => Cow::Borrowed("Pending"),
        other => Cow::Borrowed(other),
    }
}

impl BadgeStyle {
    /// Whether the badge needs dark text on its fill color.
    pub fn dark_text(self) -> bool {
        matches!(self, Self::Warning)
    }
}
