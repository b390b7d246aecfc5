//! The rendered surface: what an operator sees for a given state.

use std::fmt;

use super::projection::{page_controls, project, PageControl};
use crate::controller::NavigationState;
use crate::model::{or_placeholder, User, UserId};
use crate::record_store::{CollectionStatus, RecordCollectionState};

pub const TITLE: &str = "User Management Dashboard";
pub const SEARCH_PLACEHOLDER: &str = "Search by name or company";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// One table row, placeholders already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: String,
}

impl From<&User> for RowView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: or_placeholder(user.name()).to_string(),
            email: or_placeholder(user.email()).to_string(),
            company: or_placeholder(user.company_name()).to_string(),
        }
    }
}

/// Current contents of the three edit inputs. Absent fields show as empty inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModalView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: String,
}

impl From<&User> for EditModalView {
    fn from(draft: &User) -> Self {
        Self {
            id: draft.id,
            name: draft.name().unwrap_or_default().to_string(),
            email: draft.email().unwrap_or_default().to_string(),
            company: draft.company_name().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteModalView {
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub search: String,
    pub rows: Vec<RowView>,
    pub page_controls: Vec<PageControl>,
    pub edit_modal: Option<EditModalView>,
    pub delete_modal: Option<DeleteModalView>,
}

/// The whole dashboard. Loading and failure replace the table instead of overlaying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Failed { message: String },
    Table(TableView),
}

impl DashboardView {
    pub fn build(state: &RecordCollectionState, nav: &NavigationState, page_size: usize) -> Self {
        match state.status() {
            CollectionStatus::Loading => DashboardView::Loading,
            CollectionStatus::Failed(message) => DashboardView::Failed {
                message: message.to_string(),
            },
            CollectionStatus::Ready => {
                let projection = project(&state.users, &nav.search, nav.current_page, page_size);
                let selected = nav.selected.as_ref();
                DashboardView::Table(TableView {
                    search: nav.search.clone(),
                    rows: projection.rows.iter().map(|user| RowView::from(*user)).collect(),
                    page_controls: page_controls(projection.total_pages, nav.current_page),
                    edit_modal: selected
                        .filter(|_| nav.edit_open)
                        .map(EditModalView::from),
                    delete_modal: selected
                        .filter(|_| nav.delete_open)
                        .map(|user| DeleteModalView { id: user.id }),
                })
            }
        }
    }

    pub fn table(&self) -> Option<&TableView> {
        match self {
            DashboardView::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardView::Loading => writeln!(f, "Loading..."),
            DashboardView::Failed { message } => writeln!(f, "Error: {message}"),
            DashboardView::Table(table) => write!(f, "{table}"),
        }
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        if self.search.is_empty() {
            writeln!(f, "[ {SEARCH_PLACEHOLDER} ]")?;
        } else {
            writeln!(f, "[ {} ]", self.search)?;
        }
        writeln!(f, "ID | Name | Email | Company | Actions")?;
        for row in &self.rows {
            writeln!(
                f,
                "{} | {} | {} | {} | [Edit] [Delete]",
                row.id, row.name, row.email, row.company
            )?;
        }

        let controls: Vec<String> = self
            .page_controls
            .iter()
            .map(|c| if c.active { format!("({})", c.number) } else { c.number.to_string() })
            .collect();
        writeln!(f, "Pages: {}", controls.join(" "))?;

        if let Some(edit) = &self.edit_modal {
            writeln!(f, "-- Edit User --")?;
            writeln!(f, "Name: {}", edit.name)?;
            writeln!(f, "Email: {}", edit.email)?;
            writeln!(f, "Company: {}", edit.company)?;
            writeln!(f, "[Cancel] [Save]")?;
        }
        if self.delete_modal.is_some() {
            writeln!(f, "-- {DELETE_PROMPT} --")?;
            writeln!(f, "[No] [Yes]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PLACEHOLDER;
    use crate::record_store::StoreEvent;
    use crate::framework::ActorState;
    use serde_json::json;

    fn two_users() -> RecordCollectionState {
        RecordCollectionState::with_users(vec![
            User::new(1, "John Doe", "john@example.com", "Company A"),
            User::new(2, "Jane Smith", "jane@example.com", "Company B"),
        ])
    }

    #[test]
    fn test_table_lists_rows_and_single_page_control() {
        let view = DashboardView::build(&two_users(), &NavigationState::default(), 5);
        let table = view.table().expect("table");

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].email, "jane@example.com");
        assert_eq!(table.page_controls, vec![PageControl { number: 1, active: true }]);

        let text = view.to_string();
        assert!(text.contains(TITLE));
        assert!(text.contains(SEARCH_PLACEHOLDER));
        assert!(text.contains("John Doe"));
    }

    #[test]
    fn test_loading_and_error_replace_the_table() {
        let mut state = two_users();
        state.apply(StoreEvent::LoadStarted);
        let view = DashboardView::build(&state, &NavigationState::default(), 5);
        assert_eq!(view, DashboardView::Loading);
        assert_eq!(view.to_string(), "Loading...\n");

        state.apply(StoreEvent::LoadFailed("Network Error".into()));
        let view = DashboardView::build(&state, &NavigationState::default(), 5);
        assert!(view.table().is_none());
        assert_eq!(view.to_string(), "Error: Network Error\n");
    }

    #[test]
    fn test_partial_record_renders_placeholder() {
        let partial: User = serde_json::from_value(json!({ "id": 3, "name": "Ann" })).unwrap();
        let state = RecordCollectionState::with_users(vec![partial]);
        let view = DashboardView::build(&state, &NavigationState::default(), 5);

        let row = &view.table().unwrap().rows[0];
        assert_eq!(row.name, "Ann");
        assert_eq!(row.email, PLACEHOLDER);
        assert_eq!(row.company, PLACEHOLDER);
    }

    #[test]
    fn test_modals_follow_navigation_flags() {
        let state = two_users();
        let mut nav = NavigationState::default();
        nav.selected = Some(state.users[0].clone());

        let table = DashboardView::build(&state, &nav, 5).table().cloned().unwrap();
        assert!(table.edit_modal.is_none());
        assert!(table.delete_modal.is_none());

        nav.edit_open = true;
        nav.delete_open = true;
        let view = DashboardView::build(&state, &nav, 5);
        let table = view.table().unwrap();
        assert_eq!(table.edit_modal.as_ref().map(|m| m.name.as_str()), Some("John Doe"));
        assert_eq!(table.delete_modal, Some(DeleteModalView { id: UserId(1) }));
        assert!(view.to_string().contains(DELETE_PROMPT));
    }
}
