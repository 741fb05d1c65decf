use userboard_business::{DialogFlags, DirectoryState, seed_users};

use crate::widgets;

/// The userboard application: a directory state machine plus the dialog
/// flags the modal windows render from.
pub struct UserboardApp {
    directory: DirectoryState,
    dialogs: DialogFlags,
}

impl UserboardApp {
    /// Called once before the first frame. The store is populated from the
    /// seed fixture, standing in for a directory service.
    pub fn new() -> Self {
        Self {
            directory: DirectoryState::new(seed_users()),
            dialogs: DialogFlags::new(),
        }
    }
}

impl Default for UserboardApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for UserboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("User Management");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_panel(&mut self.directory, &mut self.dialogs, ui);
        });
    }
}
