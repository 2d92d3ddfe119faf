use askama::Template;

use crate::models::{CurrentUser, LayoutState, Role, SortColumn, TableQuery, UserRecord};
use crate::utils::build_query_string;

/// One clickable heading of the users table.
#[derive(Debug, Clone)]
pub struct ColumnHeader {
    pub label: &'static str,
    /// Query string selecting this column under the toggle rule.
    pub href: String,
    /// Sort marker when this is the active column.
    pub arrow: Option<&'static str>,
}

/// Headings for every sortable column given the current query.
pub fn column_headers(query: &TableQuery) -> Vec<ColumnHeader> {
    SortColumn::all()
        .iter()
        .map(|column| ColumnHeader {
            label: column.label(),
            href: build_query_string(&query.with_toggled(*column).to_query_pairs()),
            arrow: (query.sort.column == *column).then(|| query.sort.direction.arrow()),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersPageTemplate<'a> {
    pub app_name: String,
    pub app_initial: String,
    pub current_user: CurrentUser,
    pub layout: LayoutState,
    pub workspaces: &'a [&'a str],
    pub stylesheet: &'a str,
    pub query: &'a TableQuery,
    pub roles: &'a [Role],
    pub columns: Vec<ColumnHeader>,
    pub rows: &'a [&'a UserRecord],
    pub total_count: usize,
}
