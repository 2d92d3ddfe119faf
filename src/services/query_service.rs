use crate::models::{TableQuery, UserRecord};

/// Filter and sort `records` into the view the users table renders.
///
/// Search runs first, then the role filter, then a stable sort on the
/// active column. Every call recomputes the view from the full record set.
pub fn query<'a>(records: &'a [UserRecord], query: &TableQuery) -> Vec<&'a UserRecord> {
    let needle = query.search.to_lowercase();
    let mut view: Vec<&UserRecord> = records
        .iter()
        .filter(|user| user.matches_search(&needle))
        .filter(|user| query.role.accepts(user))
        .collect();
    view.sort_by(|a, b| query.sort.compare(a, b));
    tracing::debug!(
        total = records.len(),
        shown = view.len(),
        search = %query.search,
        role = %query.role,
        sort = %query.sort.column,
        direction = %query.sort.direction,
        "Users query"
    );
    view
}
