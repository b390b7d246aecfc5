use tracing::{debug, instrument};

use super::{Gesture, NavigationState};
use crate::clients::{ActorClient, PendingOperation, RecordStoreClient};
use crate::model::User;
use crate::view::DashboardView;

/// Turns gestures into navigation transitions and record store calls.
///
/// Store calls are fire-and-forget: the returned [`PendingOperation`] may be dropped.
/// Modals close immediately, whatever the eventual network outcome.
pub struct InteractionController {
    store: RecordStoreClient,
    nav: NavigationState,
    page_size: usize,
}

impl InteractionController {
    pub fn new(store: RecordStoreClient, page_size: usize) -> Self {
        Self {
            store,
            nav: NavigationState::default(),
            page_size: page_size.max(1),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn store(&self) -> &RecordStoreClient {
        &self.store
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The dashboard as of the last committed store state.
    pub fn view(&self) -> DashboardView {
        DashboardView::build(&self.store.current(), &self.nav, self.page_size)
    }

    /// Initial load when the dashboard is first shown.
    ///
    /// Returns once the loading phase is committed; the request itself is pending.
    pub async fn start(&self) -> PendingOperation {
        self.store.load_all().await
    }

    /// Reload on operator request. Nothing retries on its own.
    pub async fn retry_clicked(&self) -> PendingOperation {
        self.store.load_all().await
    }

    #[instrument(skip(self))]
    pub fn search_changed(&mut self, query: impl Into<String> + std::fmt::Debug) {
        self.nav.set_search(query);
    }

    /// No bounds check: an out-of-range page simply renders no rows.
    #[instrument(skip(self))]
    pub fn page_clicked(&mut self, page: usize) {
        self.nav.go_to_page(page);
    }

    #[instrument(skip(self, user), fields(id = %user.id))]
    pub fn edit_clicked(&mut self, user: &User) {
        self.nav.open_edit(user);
    }

    /// Field edits only touch the draft while the edit modal is open.
    pub fn edit_name_changed(&mut self, value: impl Into<String>) {
        if let Some(draft) = self.nav.draft_mut() {
            draft.name = Some(value.into());
        }
    }

    pub fn edit_email_changed(&mut self, value: impl Into<String>) {
        if let Some(draft) = self.nav.draft_mut() {
            draft.email = Some(value.into());
        }
    }

    pub fn edit_company_changed(&mut self, value: impl Into<String>) {
        if let Some(draft) = self.nav.draft_mut() {
            draft.set_company_name(value);
        }
    }

    /// Sends the draft and closes the edit modal without waiting for the response.
    #[instrument(skip(self))]
    pub fn save_clicked(&mut self) -> Option<PendingOperation> {
        let draft = self.nav.pending_edit()?.clone();
        let pending = self.store.update_one(draft);
        self.nav.close_edit();
        Some(pending)
    }

    pub fn cancel_edit(&mut self) {
        self.nav.close_edit();
    }

    #[instrument(skip(self, user), fields(id = %user.id))]
    pub fn delete_clicked(&mut self, user: &User) {
        self.nav.open_delete(user);
    }

    /// Deletes the selected record, closes the confirmation and corrects the page.
    ///
    /// The correction uses the collection as currently committed, minus the record
    /// being deleted, and steps back at most one page.
    #[instrument(skip(self))]
    pub fn confirm_delete(&mut self) -> Option<PendingOperation> {
        let id = self.nav.pending_delete()?;
        let pending = self.store.delete_one(id);
        self.nav.close_delete();

        let remaining = self.store.current().len_without(id);
        let before = self.nav.current_page;
        self.nav.correct_page_after_delete(remaining, self.page_size);
        debug!(%id, remaining, before, after = self.nav.current_page, "Page corrected");
        Some(pending)
    }

    pub fn cancel_delete(&mut self) {
        self.nav.close_delete();
    }

    /// Single entry point for hosts that deliver gestures as values.
    pub async fn handle(&mut self, gesture: Gesture) -> Option<PendingOperation> {
        debug!(gesture = gesture.name(), "Handling gesture");
        match gesture {
            Gesture::SearchChanged(query) => self.search_changed(query),
            Gesture::PageClicked(page) => self.page_clicked(page),
            Gesture::EditClicked(user) => self.edit_clicked(&user),
            Gesture::EditNameChanged(value) => self.edit_name_changed(value),
            Gesture::EditEmailChanged(value) => self.edit_email_changed(value),
            Gesture::EditCompanyChanged(value) => self.edit_company_changed(value),
            Gesture::SaveClicked => return self.save_clicked(),
            Gesture::CancelEdit => self.cancel_edit(),
            Gesture::DeleteClicked(user) => self.delete_clicked(&user),
            Gesture::ConfirmDelete => return self.confirm_delete(),
            Gesture::CancelDelete => self.cancel_delete(),
            Gesture::RetryClicked => return Some(self.retry_clicked().await),
        }
        None
    }
}
