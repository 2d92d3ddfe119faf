use askama::Template;

use crate::config::{Settings, DEFAULT_WORKSPACES};
use crate::error::AppError;
use crate::models::{CurrentUser, LayoutState, Role, TableQuery, UserRecord};
use crate::services::query;

pub mod users_page_template;

pub use users_page_template::{column_headers, ColumnHeader, UsersPageTemplate};

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");

/// Values shared by every page rendered inside the layout shell.
pub struct PageGlobals {
    pub app_name: String,
    pub app_initial: String,
    pub current_user: CurrentUser,
    pub layout: LayoutState,
    pub workspaces: &'static [&'static str],
    pub stylesheet: &'static str,
}

pub fn build_page_globals(settings: &Settings, layout: LayoutState) -> PageGlobals {
    let app_initial = settings
        .app_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    PageGlobals {
        app_name: settings.app_name.clone(),
        app_initial,
        current_user: CurrentUser {
            name: settings.current_user.clone(),
            email: settings.current_email.clone(),
        },
        layout,
        workspaces: DEFAULT_WORKSPACES,
        stylesheet: DEFAULT_STYLESHEET,
    }
}

pub fn render_template<T: Template>(t: &T) -> Result<String, AppError> {
    t.render().map_err(|e| {
        tracing::error!(%e, "Template render error");
        AppError::from(e)
    })
}

/// Run `table_query` over `users` and render the User Management page.
pub fn render_users_page(
    settings: &Settings,
    users: &[UserRecord],
    table_query: &TableQuery,
    layout: LayoutState,
) -> Result<String, AppError> {
    let view = query(users, table_query);
    let PageGlobals {
        app_name,
        app_initial,
        current_user,
        layout,
        workspaces,
        stylesheet,
    } = build_page_globals(settings, layout);
    render_template(&UsersPageTemplate {
        app_name,
        app_initial,
        current_user,
        layout,
        workspaces,
        stylesheet,
        query: table_query,
        roles: Role::known(),
        columns: column_headers(table_query),
        rows: &view,
        total_count: users.len(),
    })
}
