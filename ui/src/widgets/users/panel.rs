//! Main panel for the user directory.
//!
//! Toolbar with search/filter controls, a Typora-like table of the current
//! page, and a pagination bar. Row interactions are collected during table
//! iteration and applied afterwards to keep the borrow of the directory
//! immutable while rendering.

use egui::{Color32, Frame, InnerResponse, Margin, Response, RichText, ScrollArea, Stroke, Ui};
use log::{info, warn};
use userboard_business::{
    DialogFlags, DirectoryState, UserRole, UserStatus, role_badge_style, role_label, seed_users,
    status_badge_style, status_label,
};

use super::badge::badge;
use super::modals::{show_delete_confirm_modal, show_user_form_modal};

/// Border color for the Typora-like table style (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color for the Typora-like table style (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Helper to create a Typora-style header cell with background.
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Helper to create a Typora-style data cell with padding.
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// A row interaction collected during table iteration.
enum RowAction {
    Edit(u32),
    Delete(u32),
}

/// Displays the user directory panel with toolbar, table, and pagination.
pub fn users_panel(
    directory: &mut DirectoryState,
    dialogs: &mut DialogFlags,
    ui: &mut Ui,
) -> Response {
    let response = ui.vertical(|ui| {
        toolbar(directory, dialogs, ui);
        ui.add_space(8.0);
        user_table(directory, dialogs, ui);
        ui.add_space(8.0);
        pagination_bar(directory, ui);
    });

    if dialogs.user_form_open {
        show_user_form_modal(directory, dialogs, ui);
    }
    if dialogs.delete_confirm_open {
        show_delete_confirm_modal(directory, dialogs, ui);
    }

    response.response
}

fn toolbar(directory: &mut DirectoryState, dialogs: &mut DialogFlags, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let mut term = directory.search_term().to_owned();
        let search = egui::TextEdit::singleline(&mut term)
            .hint_text("Search by name or email...")
            .desired_width(200.0);
        if ui.add(search).changed() {
            directory.set_search_term(term);
        }

        role_filter_combo(directory, ui);
        status_filter_combo(directory, ui);

        if ui.button("🔄 Refresh").clicked() {
            directory.reload(seed_users());
        }
        if ui.button("➕ Add User").clicked() {
            directory.open_add_user(dialogs);
        }
        if ui.button("📤 Export").clicked() {
            match directory.export_filtered_json() {
                Ok(json) => {
                    ui.ctx().copy_text(json);
                    info!("exported filtered users to clipboard");
                }
                Err(err) => warn!("export failed: {err}"),
            }
        }
    });
}

fn role_filter_combo(directory: &mut DirectoryState, ui: &mut Ui) {
    let current = directory.role_filter();
    let mut selection = current;
    let selected_text = current.map_or_else(
        || "All Roles".to_owned(),
        |role| role_label(role.as_str()).into_owned(),
    );
    egui::ComboBox::from_id_salt("role_filter")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selection, None, "All Roles");
            for role in UserRole::ALL {
                ui.selectable_value(&mut selection, Some(role), role_label(role.as_str()).into_owned());
            }
        });
    if selection != current {
        directory.set_role_filter(selection);
    }
}

fn status_filter_combo(directory: &mut DirectoryState, ui: &mut Ui) {
    let current = directory.status_filter();
    let mut selection = current;
    let selected_text = current.map_or_else(
        || "All Statuses".to_owned(),
        |status| status_label(status.as_str()).into_owned(),
    );
    egui::ComboBox::from_id_salt("status_filter")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selection, None, "All Statuses");
            for status in UserStatus::ALL {
                ui.selectable_value(
                    &mut selection,
                    Some(status),
                    status_label(status.as_str()).into_owned(),
                );
            }
        });
    if selection != current {
        directory.set_status_filter(selection);
    }
}

fn user_table(directory: &mut DirectoryState, dialogs: &mut DialogFlags, ui: &mut Ui) {
    // Collect interactions, apply after the table borrow ends.
    let mut select_all_change: Option<bool> = None;
    let mut toggle_id: Option<u32> = None;
    let mut action: Option<RowAction> = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("users_table")
                    .num_columns(7)
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(40.0)
                    .show(ui, |ui| {
                        header_cell(ui, |ui| {
                            let mut select_all = directory.select_all();
                            if ui.checkbox(&mut select_all, "").changed() {
                                select_all_change = Some(select_all);
                            }
                        });
                        header_cell(ui, |ui| {
                            ui.strong("User");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("Role");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("Status");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("Department");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("Last Login");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("Actions");
                        });
                        ui.end_row();

                        for user in directory.current_page_users() {
                            data_cell(ui, |ui| {
                                let mut selected = user.selected;
                                if ui.checkbox(&mut selected, "").changed() {
                                    toggle_id = Some(user.id);
                                }
                            });

                            data_cell(ui, |ui| {
                                ui.vertical(|ui| {
                                    ui.label(&user.name);
                                    ui.label(RichText::new(&user.email).small().weak());
                                });
                            });

                            let role = user.role.as_str();
                            data_cell(ui, |ui| {
                                badge(ui, role_badge_style(role), &role_label(role));
                            });

                            let status = user.status.as_str();
                            data_cell(ui, |ui| {
                                badge(ui, status_badge_style(status), &status_label(status));
                            });

                            data_cell(ui, |ui| {
                                ui.label(user.department.as_deref().unwrap_or("—"));
                            });

                            data_cell(ui, |ui| {
                                ui.label(
                                    RichText::new(
                                        user.last_login.format("%Y-%m-%d %H:%M").to_string(),
                                    )
                                    .monospace(),
                                );
                            });

                            data_cell(ui, |ui| {
                                ui.horizontal(|ui| {
                                    if ui.button("✏️").on_hover_text("Edit user").clicked() {
                                        action = Some(RowAction::Edit(user.id));
                                    }
                                    if ui.button("🗑️").on_hover_text("Delete user").clicked() {
                                        action = Some(RowAction::Delete(user.id));
                                    }
                                });
                            });

                            ui.end_row();
                        }
                    });
            });
        });

    if let Some(flag) = select_all_change {
        directory.toggle_select_all(flag);
    }
    if let Some(id) = toggle_id {
        directory.toggle_selected(id);
    }
    match action {
        Some(RowAction::Edit(id)) => directory.open_edit_user(id, dialogs),
        Some(RowAction::Delete(id)) => directory.request_delete(id, dialogs),
        None => {}
    }
}

fn pagination_bar(directory: &mut DirectoryState, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let shown = directory.current_page_users().len();
        let total = directory.filtered_users().count();
        ui.label(format!("{shown} of {total} users"));

        ui.separator();

        if ui.button("◀ Previous").clicked() {
            directory.previous_page();
        }
        for page in directory.page_numbers() {
            let is_current = page == directory.current_page();
            if ui.selectable_label(is_current, page.to_string()).clicked() {
                directory.go_to_page(page);
            }
        }
        if ui.button("Next ▶").clicked() {
            directory.next_page();
        }

        ui.separator();
        ui.label(format!(
            "Page {} of {}",
            directory.current_page(),
            directory.total_pages()
        ));
    });
}
