//! Dialog capability interface.
//!
//! The directory core opens and closes modal dialogs by identifier and never
//! touches presentation internals. The UI hands the core an implementation of
//! [`DialogController`]; [`DialogFlags`] is the shipped one, a pair of open
//! flags the render loop reads back.

/// The two dialogs the editor workflow drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogId {
    /// Create/edit user form.
    UserForm,
    /// Delete confirmation.
    DeleteConfirm,
}

/// Capability to show and hide modal dialogs.
pub trait DialogController {
    fn open(&mut self, dialog: DialogId);
    fn close(&mut self, dialog: DialogId);
}

/// Plain open/closed flags, one per dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogFlags {
    pub user_form_open: bool,
    pub delete_confirm_open: bool,
}

impl DialogFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given dialog is currently open.
    pub fn is_open(&self, dialog: DialogId) -> bool {
        match dialog {
            DialogId::UserForm => self.user_form_open,
            DialogId::DeleteConfirm => self.delete_confirm_open,
        }
    }
}

impl DialogController for DialogFlags {
    fn open(&mut self, dialog: DialogId) {
        match dialog {
            DialogId::UserForm => self.user_form_open = true,
            DialogId::DeleteConfirm => self.delete_confirm_open = true,
        }
    }

    fn close(&mut self, dialog: DialogId) {
        match dialog {
            DialogId::UserForm => self.user_form_open = false,
            DialogId::DeleteConfirm => self.delete_confirm_open = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_track_open_and_close_per_dialog() {
        let mut flags = DialogFlags::new();
        assert!(!flags.is_open(DialogId::UserForm));

        flags.open(DialogId::UserForm);
        assert!(flags.is_open(DialogId::UserForm));
        assert!(!flags.is_open(DialogId::DeleteConfirm));

        flags.open(DialogId::DeleteConfirm);
        flags.close(DialogId::UserForm);
        assert!(!flags.is_open(DialogId::UserForm));
        assert!(flags.is_open(DialogId::DeleteConfirm));
    }
}
