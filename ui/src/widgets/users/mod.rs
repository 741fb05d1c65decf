//! Widgets for the user directory screen.
//!
//! The panel renders from `DirectoryState` and dispatches its transition
//! methods; modal windows render from the `DialogFlags` the business layer
//! drives through its `DialogController` capability. No domain state lives
//! on this side.

mod badge;
mod modals;
mod panel;

pub use badge::badge;
pub use modals::{show_delete_confirm_modal, show_user_form_modal};
pub use panel::users_panel;
