//! Editor workflow: create/edit drafts and the delete confirmation.
//!
//! The workflow is a small state machine over [`EditorMode`]:
//! `Closed → Adding → Closed`, `Closed → Editing → Closed`, and the
//! independent `Closed → ConfirmingDelete → Closed`. The draft is a copy of
//! a record's editable fields; the store is only touched on a valid save or
//! a confirmed delete. Dialogs are driven through the
//! [`DialogController`] capability so this module never sees presentation
//! internals.

use chrono::{DateTime, Utc};
use log::info;
use thiserror::Error;

use crate::dialog::{DialogController, DialogId};
use crate::user::{User, UserRole, UserStatus};

use super::state::DirectoryState;

/// Which workflow, if any, the editor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// No dialog active.
    #[default]
    Closed,
    /// User form open for a new record.
    Adding,
    /// User form open over the record with this id.
    Editing(u32),
    /// Delete confirmation open for the record with this id.
    ConfirmingDelete(u32),
}

/// A field-level reason a draft cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("email is not a valid address")]
    EmailInvalid,
    #[error("role is required")]
    RoleRequired,
    #[error("status is required")]
    StatusRequired,
}

/// The in-progress, unsaved copy of a user's editable fields.
///
/// String fields double as the form's text buffers; optional fields become
/// `None` when left empty. Avatar, last-login, and selection never pass
/// through the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub phone: String,
    pub department: String,
    pub notes: String,
}

/// A draft that passed validation, with required fields materialized.
#[derive(Debug, Clone)]
pub struct ValidDraft {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
}

impl UserDraft {
    /// Load a record's editable fields into a draft.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: Some(user.role),
            status: Some(user.status),
            phone: user.phone.clone().unwrap_or_default(),
            department: user.department.clone().unwrap_or_default(),
            notes: user.notes.clone().unwrap_or_default(),
        }
    }

    /// Check the required/format constraints, collecting every violation.
    pub fn validate(&self) -> Result<ValidDraft, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::NameRequired);
        }
        if self.email.trim().is_empty() {
            errors.push(ValidationError::EmailRequired);
        } else if !has_email_shape(self.email.trim()) {
            errors.push(ValidationError::EmailInvalid);
        }
        if self.role.is_none() {
            errors.push(ValidationError::RoleRequired);
        }
        if self.status.is_none() {
            errors.push(ValidationError::StatusRequired);
        }

        match (self.role, self.status) {
            (Some(role), Some(status)) if errors.is_empty() => Ok(ValidDraft {
                name: self.name.clone(),
                email: self.email.trim().to_owned(),
                role,
                status,
                phone: opt(&self.phone),
                department: opt(&self.department),
                notes: opt(&self.notes),
            }),
            _ => Err(errors),
        }
    }
}

fn opt(field: &str) -> Option<String> {
    let trimmed = field.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Basic address shape: `local@domain` with a dotted domain. Not RFC 5322.
fn has_email_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl DirectoryState {
    /// Open the user form with a cleared draft for a new record.
    pub fn open_add_user(&mut self, dialogs: &mut dyn DialogController) {
        self.draft = UserDraft::default();
        self.mode = EditorMode::Adding;
        dialogs.open(DialogId::UserForm);
    }

    /// Open the user form over an existing record.
    ///
    /// No-op when the id is stale (record already removed).
    pub fn open_edit_user(&mut self, id: u32, dialogs: &mut dyn DialogController) {
        let Some(user) = self.user(id) else {
            return;
        };
        self.draft = UserDraft::from_user(user);
        self.mode = EditorMode::Editing(id);
        dialogs.open(DialogId::UserForm);
    }

    /// Commit the draft to the store.
    ///
    /// An invalid draft mutates nothing and leaves the form open; the
    /// violations come back for field-level display. On success the store is
    /// updated atomically, the view re-derived, and the form closed.
    pub fn save_user(
        &mut self,
        now: DateTime<Utc>,
        dialogs: &mut dyn DialogController,
    ) -> Result<(), Vec<ValidationError>> {
        let valid = self.draft.validate()?;

        match self.mode {
            EditorMode::Adding => {
                let user = User {
                    id: User::next_id(&self.users),
                    avatar: User::placeholder_avatar(&valid.name),
                    last_login: now,
                    selected: false,
                    name: valid.name,
                    email: valid.email,
                    role: valid.role,
                    status: valid.status,
                    phone: valid.phone,
                    department: valid.department,
                    notes: valid.notes,
                };
                info!("created user {} ({})", user.id, user.name);
                self.users.push(user);
            }
            EditorMode::Editing(id) => {
                // Full-field overwrite except id, avatar, last_login, and
                // selection. A stale id mutates nothing.
                if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
                    user.name = valid.name;
                    user.email = valid.email;
                    user.role = valid.role;
                    user.status = valid.status;
                    user.phone = valid.phone;
                    user.department = valid.department;
                    user.notes = valid.notes;
                    info!("updated user {id}");
                }
            }
            EditorMode::Closed | EditorMode::ConfirmingDelete(_) => return Ok(()),
        }

        self.apply_filters();
        self.draft = UserDraft::default();
        self.mode = EditorMode::Closed;
        dialogs.close(DialogId::UserForm);
        Ok(())
    }

    /// Remember a delete target and open the confirmation dialog.
    ///
    /// The store is untouched until [`Self::confirm_delete`].
    pub fn request_delete(&mut self, id: u32, dialogs: &mut dyn DialogController) {
        self.mode = EditorMode::ConfirmingDelete(id);
        dialogs.open(DialogId::DeleteConfirm);
    }

    /// The record a pending delete confirmation refers to, if any.
    pub fn pending_delete(&self) -> Option<&User> {
        match self.mode {
            EditorMode::ConfirmingDelete(id) => self.user(id),
            _ => None,
        }
    }

    /// Remove the remembered record and close the confirmation.
    ///
    /// No-op when no delete is pending; removing an already-gone id is
    /// harmless.
    pub fn confirm_delete(&mut self, dialogs: &mut dyn DialogController) {
        let EditorMode::ConfirmingDelete(id) = self.mode else {
            return;
        };
        self.users.retain(|u| u.id != id);
        info!("deleted user {id}");
        self.apply_filters();
        self.mode = EditorMode::Closed;
        dialogs.close(DialogId::DeleteConfirm);
    }

    /// Discard the draft and close whichever dialog the mode implies.
    pub fn cancel_dialog(&mut self, dialogs: &mut dyn DialogController) {
        match self.mode {
            EditorMode::Adding | EditorMode::Editing(_) => dialogs.close(DialogId::UserForm),
            EditorMode::ConfirmingDelete(_) => dialogs.close(DialogId::DeleteConfirm),
            EditorMode::Closed => {}
        }
        self.draft = UserDraft::default();
        self.mode = EditorMode::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogFlags;
    use crate::fixture::seed_users;

    fn seeded() -> DirectoryState {
        DirectoryState::new(seed_users())
    }

    fn valid_draft() -> UserDraft {
        UserDraft {
            name: "Test User".to_owned(),
            email: "t@x.com".to_owned(),
            role: Some(UserRole::User),
            status: Some(UserStatus::Active),
            ..UserDraft::default()
        }
    }

    #[test]
    fn email_shape_accepts_and_rejects() {
        assert!(has_email_shape("t@x.com"));
        assert!(has_email_shape("a.b+c@mail.example.org"));
        assert!(!has_email_shape("plainaddress"));
        assert!(!has_email_shape("@x.com"));
        assert!(!has_email_shape("t@xcom"));
        assert!(!has_email_shape("t@.com"));
        assert!(!has_email_shape("t@x.com@y.com"));
    }

    #[test]
    fn open_add_clears_the_draft_and_opens_the_form() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();
        state.draft_mut().name = "leftover".to_owned();

        state.open_add_user(&mut dialogs);

        assert_eq!(*state.mode(), EditorMode::Adding);
        assert_eq!(*state.draft(), UserDraft::default());
        assert!(dialogs.user_form_open);
    }

    #[test]
    fn adding_a_user_appends_with_the_next_id() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();
        let now = Utc::now();

        state.open_add_user(&mut dialogs);
        *state.draft_mut() = valid_draft();
        state.save_user(now, &mut dialogs).unwrap();

        assert_eq!(state.users().len(), 9);
        let created = state.user(9).unwrap();
        assert_eq!(created.name, "Test User");
        assert_eq!(created.email, "t@x.com");
        assert_eq!(created.last_login, now);
        assert!(created.avatar.ends_with("text=T"));
        assert_eq!(*state.mode(), EditorMode::Closed);
        assert!(!dialogs.user_form_open);
        // The new record is visible through the refreshed view.
        assert!(state.filtered_users().any(|u| u.id == 9));
    }

    #[test]
    fn adding_to_an_empty_store_starts_ids_at_one() {
        let mut state = DirectoryState::new(Vec::new());
        let mut dialogs = DialogFlags::new();

        state.open_add_user(&mut dialogs);
        *state.draft_mut() = valid_draft();
        state.save_user(Utc::now(), &mut dialogs).unwrap();

        assert_eq!(state.users().len(), 1);
        assert_eq!(state.users()[0].id, 1);
    }

    #[test]
    fn invalid_draft_saves_nothing_and_keeps_the_form_open() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.open_add_user(&mut dialogs);
        state.draft_mut().email = "not-an-address".to_owned();
        let errors = state.save_user(Utc::now(), &mut dialogs).unwrap_err();

        assert!(errors.contains(&ValidationError::NameRequired));
        assert!(errors.contains(&ValidationError::EmailInvalid));
        assert!(errors.contains(&ValidationError::RoleRequired));
        assert!(errors.contains(&ValidationError::StatusRequired));
        assert_eq!(state.users().len(), 8);
        assert_eq!(*state.mode(), EditorMode::Adding);
        assert!(dialogs.user_form_open);
    }

    #[test]
    fn editing_loads_the_record_into_the_draft() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.open_edit_user(3, &mut dialogs);

        assert_eq!(*state.mode(), EditorMode::Editing(3));
        assert_eq!(state.draft().name, "Carlos López");
        assert_eq!(state.draft().role, Some(UserRole::Moderator));
        assert_eq!(state.draft().department, "Support");
        assert!(dialogs.user_form_open);
    }

    #[test]
    fn editing_preserves_avatar_last_login_and_id() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();
        let original = state.user(3).unwrap().clone();

        state.open_edit_user(3, &mut dialogs);
        state.draft_mut().department = "Platform".to_owned();
        state.save_user(Utc::now(), &mut dialogs).unwrap();

        let edited = state.user(3).unwrap();
        assert_eq!(edited.department.as_deref(), Some("Platform"));
        assert_eq!(edited.avatar, original.avatar);
        assert_eq!(edited.last_login, original.last_login);
        assert_eq!(edited.id, 3);
        assert_eq!(state.users().len(), 8);
        assert_eq!(*state.mode(), EditorMode::Closed);
    }

    #[test]
    fn editing_a_stale_id_is_a_no_op() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.open_edit_user(42, &mut dialogs);

        assert_eq!(*state.mode(), EditorMode::Closed);
        assert!(!dialogs.user_form_open);
    }

    #[test]
    fn clearing_an_optional_field_stores_none() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.open_edit_user(3, &mut dialogs);
        state.draft_mut().phone.clear();
        state.save_user(Utc::now(), &mut dialogs).unwrap();

        assert_eq!(state.user(3).unwrap().phone, None);
    }

    #[test]
    fn delete_flow_removes_the_record_only_after_confirmation() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.request_delete(2, &mut dialogs);
        assert_eq!(state.users().len(), 8, "request alone must not mutate");
        assert!(dialogs.delete_confirm_open);
        assert_eq!(state.pending_delete().map(|u| u.id), Some(2));

        state.confirm_delete(&mut dialogs);
        assert_eq!(state.users().len(), 7);
        assert!(state.user(2).is_none());
        assert!(!state.filtered_users().any(|u| u.id == 2));
        assert!(!dialogs.delete_confirm_open);
        assert_eq!(*state.mode(), EditorMode::Closed);
    }

    #[test]
    fn confirm_without_a_pending_delete_is_a_no_op() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.confirm_delete(&mut dialogs);
        assert_eq!(state.users().len(), 8);
    }

    #[test]
    fn deleting_an_already_gone_record_is_harmless() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.request_delete(5, &mut dialogs);
        state.users.retain(|u| u.id != 5); // raced out from under the dialog
        state.confirm_delete(&mut dialogs);

        assert_eq!(state.users().len(), 7);
        assert_eq!(*state.mode(), EditorMode::Closed);
    }

    #[test]
    fn cancel_discards_the_draft_without_mutating_the_store() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.open_edit_user(4, &mut dialogs);
        state.draft_mut().name = "Changed".to_owned();
        state.cancel_dialog(&mut dialogs);

        assert_eq!(state.user(4).unwrap().name, "Ana Martínez");
        assert_eq!(*state.draft(), UserDraft::default());
        assert_eq!(*state.mode(), EditorMode::Closed);
        assert!(!dialogs.user_form_open);
    }

    #[test]
    fn cancel_closes_the_delete_confirmation() {
        let mut state = seeded();
        let mut dialogs = DialogFlags::new();

        state.request_delete(1, &mut dialogs);
        state.cancel_dialog(&mut dialogs);

        assert_eq!(state.users().len(), 8);
        assert!(!dialogs.delete_confirm_open);
    }
}
