//! The user directory: store, filtered view, pagination, selection, and the
//! editor workflow.
//!
//! Everything here is pure in-memory state with synchronous transitions, so
//! the screen can be tested without a UI harness. Widget code should only
//! read accessors and call the transition methods; it defines no domain
//! state of its own.

pub mod editor;
pub mod state;

pub use editor::{EditorMode, UserDraft, ValidDraft, ValidationError};
pub use state::{DirectoryState, ITEMS_PER_PAGE};
