/// Rendering of the User Management page
use std::collections::HashMap;

use jupiter::config::Settings;
use jupiter::models::{LayoutState, Overlay, Role, RoleFilter, SortColumn, SortDirection, SortSpec, TableQuery, UserRecord};
use jupiter::services::mock_users;
use jupiter::templates::{column_headers, render_users_page};
use jupiter::utils::parse_query_string;

fn settings() -> Settings {
    Settings {
        users_file: None,
        app_name: "Jupiter".to_string(),
        current_user: "John Doe".to_string(),
        current_email: "john@example.com".to_string(),
        dark_mode: false,
    }
}

#[test]
fn test_rows_render_in_view_order() {
    let users = mock_users();
    let q = TableQuery {
        sort: SortSpec::new(SortColumn::Name, SortDirection::Desc),
        ..TableQuery::default()
    };
    let html = render_users_page(&settings(), &users, &q, LayoutState::default()).unwrap();

    let john = html.find("john@example.com</td>").unwrap();
    let jane = html.find("jane@example.com</td>").unwrap();
    assert!(john < jane, "John Doe sorts before Jane Smith descending");
    assert!(html.contains("Showing 5 of 5 users"));
    assert!(html.contains("<h1>User Management</h1>"));
}

#[test]
fn test_filtered_out_rows_are_absent() {
    let users = mock_users();
    let q = TableQuery {
        search: "jane".to_string(),
        ..TableQuery::default()
    };
    let html = render_users_page(&settings(), &users, &q, LayoutState::default()).unwrap();

    assert!(html.contains("jane@example.com</td>"));
    assert!(!html.contains("john@example.com</td>"));
    assert!(html.contains("Showing 1 of 5 users"));
}

#[test]
fn test_empty_view_shows_placeholder_row() {
    let users = mock_users();
    let q = TableQuery {
        role: RoleFilter::Only(Role::Other("Guest".into())),
        ..TableQuery::default()
    };
    let html = render_users_page(&settings(), &users, &q, LayoutState::default()).unwrap();
    assert!(html.contains("No users match the current filters."));
}

#[test]
fn test_user_values_are_escaped() {
    let users = vec![UserRecord::new(1, "<b>Eve</b>", "eve@example.com", Role::User)];
    let html = render_users_page(&settings(), &users, &TableQuery::default(), LayoutState::default()).unwrap();
    assert!(!html.contains("<b>Eve</b>"));
    assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
}

#[test]
fn test_admin_badge_is_green() {
    let users = vec![UserRecord::new(1, "John Doe", "john@example.com", Role::Admin)];
    let html = render_users_page(&settings(), &users, &TableQuery::default(), LayoutState::default()).unwrap();
    assert!(html.contains(r#"<span class="badge badge-green">Admin</span>"#));
}

#[test]
fn test_layout_flags_reach_the_shell() {
    let users = mock_users();
    let mut layout = LayoutState::new(true);
    layout.toggle_collapsed();
    layout.open(Overlay::Workspaces);
    let html = render_users_page(&settings(), &users, &TableQuery::default(), layout).unwrap();

    assert!(html.contains(r#"<html lang="en" class="dark">"#));
    assert!(html.contains("sidebar collapsed"));
    assert!(html.contains("+ Add Workspace"));
    assert!(html.contains("Workspace 3"));
}

#[test]
fn test_column_headers_follow_toggle_rule() {
    let q = TableQuery::default();
    let headers = column_headers(&q);
    assert_eq!(headers.len(), 3);

    assert_eq!(headers[0].label, "Name");
    assert_eq!(headers[0].arrow, Some("▲"));
    assert!(headers[0].href.contains("sort=name&direction=desc"));

    assert_eq!(headers[1].arrow, None);
    assert!(headers[1].href.contains("sort=email&direction=asc"));
}

#[test]
fn test_header_links_round_trip_to_queries() {
    let q = TableQuery {
        search: "jane smith".to_string(),
        role: RoleFilter::Only(Role::User),
        sort: SortSpec::new(SortColumn::Role, SortDirection::Asc),
    };
    for (header, column) in column_headers(&q).iter().zip(SortColumn::all()) {
        let pairs: HashMap<String, Vec<String>> = parse_query_string(&header.href);
        let next = TableQuery::from_query_pairs(&pairs).unwrap();
        assert_eq!(next, q.with_toggled(*column));
    }
}
