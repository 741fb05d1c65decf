//! Business layer of the userboard screen.
//!
//! Holds the whole domain: the user record and its enums, the seed fixture,
//! the filter/pagination/selection state machine, the editor workflow, the
//! presenter lookups, and the dialog capability interface. The UI crate
//! renders this state and dispatches transitions; it owns no domain logic.

pub mod dialog;
pub mod directory;
pub mod fixture;
pub mod presenter;
pub mod user;

pub use dialog::{DialogController, DialogFlags, DialogId};
pub use directory::{
    DirectoryState, EditorMode, ITEMS_PER_PAGE, UserDraft, ValidDraft, ValidationError,
};
pub use fixture::seed_users;
pub use presenter::{
    BadgeStyle, role_badge_style, role_label, status_badge_style, status_label,
};
pub use user::{UnknownValue, User, UserRole, UserStatus};
