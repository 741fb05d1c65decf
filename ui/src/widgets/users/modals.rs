//! Modal windows for the editor workflow.
//!
//! Both windows render only while their `DialogFlags` flag is set; every
//! close path goes back through the directory's transitions so the mode and
//! the flags never drift apart.

use chrono::Utc;
use egui::{RichText, Ui, Window};
use log::warn;
use userboard_business::{
    DialogFlags, DirectoryState, EditorMode, UserRole, UserStatus, role_label, status_label,
};

use crate::utils::colors::{COLOR_DANGER, COLOR_WARNING};

/// Shows the create/edit user form window.
pub fn show_user_form_modal(directory: &mut DirectoryState, dialogs: &mut DialogFlags, ui: &mut Ui) {
    let title = match directory.mode() {
        EditorMode::Editing(_) => "Edit User",
        _ => "Add User",
    };
    let mut open = true;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            egui::Grid::new("user_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    let draft = directory.draft_mut();

                    ui.label("Name:");
                    ui.text_edit_singleline(&mut draft.name);
                    ui.end_row();

                    ui.label("Email:");
                    ui.text_edit_singleline(&mut draft.email);
                    ui.end_row();

                    ui.label("Role:");
                    draft_role_combo(&mut draft.role, ui);
                    ui.end_row();

                    ui.label("Status:");
                    draft_status_combo(&mut draft.status, ui);
                    ui.end_row();

                    ui.label("Phone:");
                    ui.text_edit_singleline(&mut draft.phone);
                    ui.end_row();

                    ui.label("Department:");
                    ui.text_edit_singleline(&mut draft.department);
                    ui.end_row();

                    ui.label("Notes:");
                    ui.text_edit_multiline(&mut draft.notes);
                    ui.end_row();
                });

            let validation = directory.draft().validate();
            if let Err(errors) = &validation {
                ui.add_space(4.0);
                for error in errors {
                    ui.colored_label(COLOR_DANGER, format!("• {error}"));
                }
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let can_save = validation.is_ok();
                if ui
                    .add_enabled(can_save, egui::Button::new("Save"))
                    .clicked()
                    && let Err(errors) = directory.save_user(Utc::now(), dialogs)
                {
                    // Unreachable through the enabled button; the guard is
                    // the state machine's, not the UI's.
                    warn!("save rejected with {} validation error(s)", errors.len());
                }

                if ui.button("Cancel").clicked() {
                    directory.cancel_dialog(dialogs);
                }
            });
        });

    if !open {
        directory.cancel_dialog(dialogs);
    }
}

fn draft_role_combo(role: &mut Option<UserRole>, ui: &mut Ui) {
    let selected_text = role.map_or_else(
        || "Select role...".to_owned(),
        |r| role_label(r.as_str()).into_owned(),
    );
    egui::ComboBox::from_id_salt("draft_role")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for option in UserRole::ALL {
                ui.selectable_value(role, Some(option), role_label(option.as_str()).into_owned());
            }
        });
}

fn draft_status_combo(status: &mut Option<UserStatus>, ui: &mut Ui) {
    let selected_text = status.map_or_else(
        || "Select status...".to_owned(),
        |s| status_label(s.as_str()).into_owned(),
    );
    egui::ComboBox::from_id_salt("draft_status")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for option in UserStatus::ALL {
                ui.selectable_value(
                    status,
                    Some(option),
                    status_label(option.as_str()).into_owned(),
                );
            }
        });
}

/// Shows the delete confirmation window.
pub fn show_delete_confirm_modal(
    directory: &mut DirectoryState,
    dialogs: &mut DialogFlags,
    ui: &mut Ui,
) {
    let mut open = true;

    Window::new("Confirm Delete")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.colored_label(COLOR_WARNING, "⚠ Warning");
            ui.add_space(4.0);

            match directory.pending_delete() {
                Some(user) => {
                    ui.label(format!(
                        "Are you sure you want to delete user '{}'?",
                        user.name
                    ));
                }
                None => {
                    ui.label("This user is no longer in the directory.");
                }
            }
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Delete").color(COLOR_DANGER))
                    .clicked()
                {
                    directory.confirm_delete(dialogs);
                }
                if ui.button("Cancel").clicked() {
                    directory.cancel_dialog(dialogs);
                }
            });
        });

    if !open {
        directory.cancel_dialog(dialogs);
    }
}
