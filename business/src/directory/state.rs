//! Filter, pagination, and selection state for the user directory.
//!
//! `DirectoryState` is the single explicit state record for the screen: the
//! store, the filter criteria, the pagination cursor, and (via
//! [`super::editor`]) the editor mode and draft. All transitions are
//! synchronous methods; anything that changes view membership re-runs
//! [`DirectoryState::apply_filters`], which resets the cursor to page 1 and
//! recomputes the page count.

use log::debug;

use crate::user::{User, UserRole, UserStatus};

use super::editor::{EditorMode, UserDraft};

/// Fixed page size of the directory table.
pub const ITEMS_PER_PAGE: usize = 10;

/// In-memory state of the user-management screen.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    /// The authoritative store, in insertion order.
    pub(crate) users: Vec<User>,
    /// Ids of the records matching the current criteria, in store order.
    pub(crate) filtered: Vec<u32>,
    /// Case-insensitive substring matched against name and email.
    pub(crate) search_term: String,
    /// Role criterion; `None` matches every role.
    pub(crate) role_filter: Option<UserRole>,
    /// Status criterion; `None` matches every status.
    pub(crate) status_filter: Option<UserStatus>,
    /// Select-all checkbox value, written through the filtered view.
    pub(crate) select_all: bool,
    /// 1-based pagination cursor.
    pub(crate) current_page: usize,
    /// `ceil(|filtered| / ITEMS_PER_PAGE)`; 0 when the view is empty.
    pub(crate) total_pages: usize,
    /// Editor workflow mode.
    pub(crate) mode: EditorMode,
    /// In-progress copy of a user's editable fields.
    pub(crate) draft: UserDraft,
}

impl DirectoryState {
    /// Create a directory over the given store and derive the initial view.
    pub fn new(users: Vec<User>) -> Self {
        let mut state = Self {
            users,
            current_page: 1,
            ..Self::default()
        };
        state.apply_filters();
        state
    }

    /// Replace the store from the data source and re-derive the view.
    pub fn reload(&mut self, users: Vec<User>) {
        self.users = users;
        self.select_all = false;
        self.apply_filters();
    }

    // =====================
    // Filter engine
    // =====================

    /// Re-derive the filtered view from the current criteria.
    ///
    /// A record is included iff it matches all three predicates. Ordering
    /// follows the store (stable filter, no re-sort). Resets `current_page`
    /// to 1 and recomputes `total_pages`.
    pub fn apply_filters(&mut self) {
        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .users
            .iter()
            .filter(|user| {
                let matches_search = needle.is_empty()
                    || user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle);
                let matches_role = self.role_filter.is_none_or(|role| user.role == role);
                let matches_status = self
                    .status_filter
                    .is_none_or(|status| user.status == status);
                matches_search && matches_role && matches_status
            })
            .map(|user| user.id)
            .collect();

        self.total_pages = self.filtered.len().div_ceil(ITEMS_PER_PAGE);
        self.current_page = 1;
        debug!(
            "filtered view: {} of {} users, {} pages",
            self.filtered.len(),
            self.users.len(),
            self.total_pages
        );
    }

    /// Update the search term and re-derive the view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filters();
    }

    /// Update the role criterion and re-derive the view.
    pub fn set_role_filter(&mut self, role: Option<UserRole>) {
        self.role_filter = role;
        self.apply_filters();
    }

    /// Update the status criterion and re-derive the view.
    pub fn set_status_filter(&mut self, status: Option<UserStatus>) {
        self.status_filter = status;
        self.apply_filters();
    }

    // =====================
    // Paginator
    // =====================

    /// The filtered records on the current page, bounds `[(page-1)*10, page*10)`.
    ///
    /// An out-of-range cursor yields an empty page, never a fault.
    pub fn current_page_users(&self) -> Vec<&User> {
        let start = self.current_page.saturating_sub(1) * ITEMS_PER_PAGE;
        if start >= self.filtered.len() {
            return Vec::new();
        }
        let end = (start + ITEMS_PER_PAGE).min(self.filtered.len());
        self.filtered[start..end]
            .iter()
            .filter_map(|id| self.user(*id))
            .collect()
    }

    /// Contiguous window of up to 5 page numbers centered on the cursor,
    /// clamped to `[1, total_pages]`. Empty when there are no pages.
    pub fn page_numbers(&self) -> Vec<usize> {
        let start = self.current_page.saturating_sub(2).max(1);
        let end = (self.current_page + 2).min(self.total_pages);
        (start..=end).collect()
    }

    /// Jump to a page. No bounds check: the page-number buttons only offer
    /// valid targets, and an out-of-range cursor just renders an empty page.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Step back one page; no-op on the first page.
    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Step forward one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages {
            self.current_page += 1;
        }
    }

    // =====================
    // Selection tracker
    // =====================

    /// Write `selected = select_all` through every record in the filtered
    /// view. Records filtered out keep whatever flag they had.
    pub fn toggle_select_all(&mut self, select_all: bool) {
        self.select_all = select_all;
        let ids = self.filtered.clone();
        for user in self.users.iter_mut().filter(|u| ids.contains(&u.id)) {
            user.selected = select_all;
        }
    }

    /// Flip one record's selection flag.
    pub fn toggle_selected(&mut self, id: u32) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
            user.selected = !user.selected;
        }
    }

    // =====================
    // Accessors
    // =====================

    /// The whole store, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a record by id.
    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The filtered view, in store order.
    pub fn filtered_users(&self) -> impl Iterator<Item = &User> {
        self.filtered.iter().filter_map(|id| self.user(*id))
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn role_filter(&self) -> Option<UserRole> {
        self.role_filter
    }

    pub fn status_filter(&self) -> Option<UserStatus> {
        self.status_filter
    }

    pub fn select_all(&self) -> bool {
        self.select_all
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Serialize the filtered view as pretty JSON, for export.
    ///
    /// Transient selection flags are skipped by the record's serde shape.
    pub fn export_filtered_json(&self) -> serde_json::Result<String> {
        let view: Vec<&User> = self.filtered_users().collect();
        serde_json::to_string_pretty(&view)
    }

    /// Current editor workflow mode.
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// The in-progress draft. The form widgets bind to this.
    pub fn draft_mut(&mut self) -> &mut UserDraft {
        &mut self.draft
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::seed_users;
    use crate::user::{UserRole, UserStatus};
    use chrono::Utc;

    fn seeded() -> DirectoryState {
        DirectoryState::new(seed_users())
    }

    /// A store large enough to exercise the page-number window.
    fn many_users(count: u32) -> Vec<User> {
        (1..=count)
            .map(|id| User {
                id,
                name: format!("User {id}"),
                email: format!("user{id}@example.com"),
                role: UserRole::User,
                status: UserStatus::Active,
                phone: None,
                department: None,
                notes: None,
                avatar: User::placeholder_avatar("User"),
                last_login: Utc::now(),
                selected: false,
            })
            .collect()
    }

    #[test]
    fn initial_view_contains_the_whole_seed() {
        let state = seeded();
        assert_eq!(state.filtered_users().count(), 8);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let mut state = seeded();
        state.set_search_term("JUAN");
        let ids: Vec<u32> = state.filtered_users().map(|u| u.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn search_matches_email_substring() {
        let mut state = seeded();
        state.set_search_term("garcia@");
        let ids: Vec<u32> = state.filtered_users().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn search_does_not_fold_diacritics() {
        // "maria" vs the stored "María": plain lowercasing keeps the accent,
        // so the literal substring does not match.
        let mut state = seeded();
        state.set_search_term("maria");
        assert_eq!(state.filtered_users().count(), 0);

        state.set_search_term("maría");
        let ids: Vec<u32> = state.filtered_users().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn role_filter_yields_seed_admins_in_store_order() {
        let mut state = seeded();
        state.set_role_filter(Some(UserRole::Admin));
        let ids: Vec<u32> = state.filtered_users().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 6]);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn criteria_combine_with_logical_and() {
        let mut state = seeded();
        state.set_role_filter(Some(UserRole::User));
        state.set_status_filter(Some(UserStatus::Active));
        let ids: Vec<u32> = state.filtered_users().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 7]);

        state.set_search_term("diego");
        let ids: Vec<u32> = state.filtered_users().map(|u| u.id).collect();
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn filtered_view_is_an_ordered_subset_of_the_store() {
        let mut state = DirectoryState::new(many_users(30));
        state.set_search_term("user2");
        let ids: Vec<u32> = state.filtered_users().map(|u| u.id).collect();
        // user2, user20..user29: store order preserved.
        assert_eq!(ids, vec![2, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29]);
    }

    #[test]
    fn changing_a_criterion_resets_the_cursor() {
        let mut state = DirectoryState::new(many_users(30));
        state.go_to_page(3);
        assert_eq!(state.current_page(), 3);
        state.set_status_filter(Some(UserStatus::Active));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn total_pages_is_the_ceiling_of_the_view_size() {
        let mut state = DirectoryState::new(many_users(21));
        assert_eq!(state.total_pages(), 3);

        state.set_search_term("no such user");
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.filtered_users().count(), 0);
    }

    #[test]
    fn page_slice_bounds_are_page_size_windows() {
        let mut state = DirectoryState::new(many_users(25));
        assert_eq!(state.current_page_users().len(), 10);

        state.go_to_page(3);
        let page: Vec<u32> = state.current_page_users().iter().map(|u| u.id).collect();
        assert_eq!(page, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_page_renders_empty() {
        let mut state = seeded();
        state.go_to_page(99);
        assert!(state.current_page_users().is_empty());
    }

    #[test]
    fn page_number_window_is_clamped_around_the_cursor() {
        let mut state = DirectoryState::new(many_users(70));
        assert_eq!(state.total_pages(), 7);
        assert_eq!(state.page_numbers(), vec![1, 2, 3]);

        state.go_to_page(4);
        assert_eq!(state.page_numbers(), vec![2, 3, 4, 5, 6]);

        state.go_to_page(7);
        assert_eq!(state.page_numbers(), vec![5, 6, 7]);
    }

    #[test]
    fn page_numbers_empty_when_view_is_empty() {
        let mut state = seeded();
        state.set_search_term("nobody");
        assert_eq!(state.page_numbers(), Vec::<usize>::new());
    }

    #[test]
    fn previous_and_next_stay_within_bounds() {
        let mut state = DirectoryState::new(many_users(25));
        state.previous_page();
        assert_eq!(state.current_page(), 1);

        state.next_page();
        state.next_page();
        assert_eq!(state.current_page(), 3);
        state.next_page();
        assert_eq!(state.current_page(), 3);

        state.previous_page();
        state.previous_page();
        state.previous_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn select_all_writes_through_the_filtered_view_only() {
        let mut state = seeded();
        state.set_role_filter(Some(UserRole::Admin));
        state.toggle_select_all(true);

        for user in state.users() {
            assert_eq!(user.selected, user.role == UserRole::Admin, "id {}", user.id);
        }
    }

    #[test]
    fn selection_survives_being_filtered_out_and_back() {
        let mut state = seeded();
        state.toggle_selected(3);
        state.set_role_filter(Some(UserRole::Admin));
        state.set_role_filter(None);
        assert!(state.user(3).is_some_and(|u| u.selected));
    }

    #[test]
    fn reload_replaces_the_store_and_rederives_the_view() {
        let mut state = seeded();
        state.set_search_term("juan");
        state.reload(many_users(12));
        // Criteria persist across a reload; "juan" matches nothing now.
        assert_eq!(state.filtered_users().count(), 0);

        state.set_search_term("");
        assert_eq!(state.filtered_users().count(), 12);
        assert_eq!(state.total_pages(), 2);
    }
}
