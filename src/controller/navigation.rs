//! UI-local navigation state and its transitions.
//!
//! Every transition here is total and pure. The store calls that some gestures make
//! live in [`InteractionController`](super::InteractionController).

use crate::model::{User, UserId};
use crate::view::total_pages;

/// Search text, current page, selection and modal flags.
///
/// Never persisted. The two modal flags are independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub search: String,
    /// 1-indexed. Not clamped: an out-of-range page shows an empty slice.
    pub current_page: usize,
    /// Independent copy of the record being edited or about to be deleted.
    pub selected: Option<User>,
    pub edit_open: bool,
    pub delete_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            search: String::new(),
            current_page: 1,
            selected: None,
            edit_open: false,
            delete_open: false,
        }
    }
}

impl NavigationState {
    /// Replaces the query. The current page is left alone.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Selects a copy of `user` and opens the edit modal.
    pub fn open_edit(&mut self, user: &User) {
        self.selected = Some(user.clone());
        self.edit_open = true;
    }

    /// Selects `user` and opens the delete confirmation.
    pub fn open_delete(&mut self, user: &User) {
        self.selected = Some(user.clone());
        self.delete_open = true;
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
    }

    pub fn close_delete(&mut self) {
        self.delete_open = false;
    }

    /// Mutable access to the edit draft, if the edit modal is open. Never touches
    /// the record store.
    pub fn draft_mut(&mut self) -> Option<&mut User> {
        let open = self.edit_open;
        self.selected.as_mut().filter(|_| open)
    }

    /// The draft to save, if the edit modal is open.
    pub fn pending_edit(&self) -> Option<&User> {
        self.selected.as_ref().filter(|_| self.edit_open)
    }

    /// The id awaiting confirmation, if the delete modal is open.
    pub fn pending_delete(&self) -> Option<UserId> {
        self.selected
            .as_ref()
            .filter(|_| self.delete_open)
            .map(|user| user.id)
    }

    /// Steps back one page if the current page no longer exists once the collection
    /// holds `remaining` records.
    ///
    /// Moves at most one page per call, and never below page 1.
    pub fn correct_page_after_delete(&mut self, remaining: usize, page_size: usize) {
        if self.current_page > total_pages(remaining, page_size) {
            self.current_page = self.current_page.saturating_sub(1).max(1);
        }
    }
}
