//! Discrete operator actions the dashboard reacts to.

use crate::model::User;

/// A user gesture, as delivered by whatever hosts the dashboard.
///
/// Row gestures carry the record shown in that row.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    SearchChanged(String),
    PageClicked(usize),
    EditClicked(User),
    EditNameChanged(String),
    EditEmailChanged(String),
    EditCompanyChanged(String),
    SaveClicked,
    CancelEdit,
    DeleteClicked(User),
    ConfirmDelete,
    CancelDelete,
    RetryClicked,
}

impl Gesture {
    /// Short stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::SearchChanged(_) => "search_changed",
            Gesture::PageClicked(_) => "page_clicked",
            Gesture::EditClicked(_) => "edit_clicked",
            Gesture::EditNameChanged(_) => "edit_name_changed",
            Gesture::EditEmailChanged(_) => "edit_email_changed",
            Gesture::EditCompanyChanged(_) => "edit_company_changed",
            Gesture::SaveClicked => "save_clicked",
            Gesture::CancelEdit => "cancel_edit",
            Gesture::DeleteClicked(_) => "delete_clicked",
            Gesture::ConfirmDelete => "confirm_delete",
            Gesture::CancelDelete => "cancel_delete",
            Gesture::RetryClicked => "retry_clicked",
        }
    }
}
