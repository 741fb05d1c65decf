pub mod users;

pub use users::{badge, show_delete_confirm_modal, show_user_form_modal, users_panel};
