use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::user_record::{Role, UserRecord};

/// Which users the role select lets through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn accepts(&self, record: &UserRecord) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(role) => &record.role == role,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleFilter::All => "All",
            RoleFilter::Only(role) => role.as_str(),
        }
    }
}

/// `All` and the empty string both mean no filter.
impl From<&str> for RoleFilter {
    fn from(s: &str) -> Self {
        if s.is_empty() || s == "All" {
            RoleFilter::All
        } else {
            RoleFilter::Only(Role::from(s))
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sortable table column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Name,
    Email,
    Role,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Email => "email",
            SortColumn::Role => "role",
        }
    }

    /// Column heading shown in tables.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Email => "Email",
            SortColumn::Role => "Role",
        }
    }

    /// Columns in display order.
    pub fn all() -> &'static [SortColumn] {
        &[SortColumn::Name, SortColumn::Email, SortColumn::Role]
    }

    /// The value of this column for `record`, as compared by the sort.
    pub fn key<'a>(&self, record: &'a UserRecord) -> &'a str {
        match self {
            SortColumn::Name => &record.name,
            SortColumn::Email => &record.email,
            SortColumn::Role => record.role.as_str(),
        }
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortColumn::Name),
            "email" => Ok(SortColumn::Email),
            "role" => Ok(SortColumn::Role),
            other => Err(AppError::InvalidSortColumn(other.to_string())),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Marker drawn next to the active column heading.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }

    /// Orient an ascending comparison. Equal stays equal so the sort remains stable.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(AppError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort column and its direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        SortSpec { column, direction }
    }

    /// Result of selecting `column`: the active column flips direction,
    /// any other column becomes active ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        if column == self.column {
            SortSpec::new(column, self.direction.flipped())
        } else {
            SortSpec::new(column, SortDirection::Asc)
        }
    }

    pub fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        self.direction.apply(self.column.key(a).cmp(self.column.key(b)))
    }
}

/// The four inputs of the users table, owned by whoever renders it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub role: RoleFilter,
    pub sort: SortSpec,
}

impl TableQuery {
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = self.sort.toggled(column);
    }

    /// Copy of this query with `column` selected.
    pub fn with_toggled(&self, column: SortColumn) -> TableQuery {
        let mut next = self.clone();
        next.toggle_sort(column);
        next
    }

    /// Build a query from decoded query-string pairs. Missing keys keep their defaults;
    /// the last value wins when a key repeats.
    pub fn from_query_pairs(pairs: &HashMap<String, Vec<String>>) -> Result<Self, AppError> {
        fn last<'a>(pairs: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
            pairs.get(key).and_then(|v| v.last()).map(|s| s.as_str())
        }

        let mut query = TableQuery::default();
        if let Some(search) = last(pairs, "search") {
            query.search = search.to_string();
        }
        if let Some(role) = last(pairs, "role") {
            query.role = RoleFilter::from(role);
        }
        if let Some(column) = last(pairs, "sort") {
            if !column.is_empty() {
                query.sort.column = column.parse()?;
            }
        }
        if let Some(direction) = last(pairs, "direction") {
            if !direction.is_empty() {
                query.sort.direction = direction.parse()?;
            }
        }
        Ok(query)
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("search".to_string(), self.search.clone()),
            ("role".to_string(), self.role.as_str().to_string()),
            ("sort".to_string(), self.sort.column.as_str().to_string()),
            ("direction".to_string(), self.sort.direction.as_str().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_active_column_flips_direction() {
        let spec = SortSpec::new(SortColumn::Name, SortDirection::Asc);
        let once = spec.toggled(SortColumn::Name);
        assert_eq!(once, SortSpec::new(SortColumn::Name, SortDirection::Desc));
        assert_eq!(once.toggled(SortColumn::Name), spec);
    }

    #[test]
    fn selecting_other_column_resets_to_ascending() {
        let spec = SortSpec::new(SortColumn::Name, SortDirection::Desc);
        assert_eq!(
            spec.toggled(SortColumn::Email),
            SortSpec::new(SortColumn::Email, SortDirection::Asc)
        );
    }

    #[test]
    fn defaults_match_initial_page_state() {
        let q = TableQuery::default();
        assert_eq!(q.search, "");
        assert_eq!(q.role, RoleFilter::All);
        assert_eq!(q.sort, SortSpec::new(SortColumn::Name, SortDirection::Asc));
    }

    #[test]
    fn unknown_column_is_rejected() {
        assert!(matches!(
            "id".parse::<SortColumn>(),
            Err(AppError::InvalidSortColumn(c)) if c == "id"
        ));
        assert!(matches!(
            "ASC".parse::<SortDirection>(),
            Err(AppError::InvalidSortDirection(_))
        ));
    }

    #[test]
    fn role_filter_parses_all_literally() {
        assert_eq!(RoleFilter::from("All"), RoleFilter::All);
        assert_eq!(RoleFilter::from("all"), RoleFilter::Only(Role::Other("all".into())));
        assert_eq!(RoleFilter::from("Admin"), RoleFilter::Only(Role::Admin));
    }

    #[test]
    fn empty_role_means_no_filter() {
        assert_eq!(RoleFilter::from(""), RoleFilter::All);
        let user = UserRecord::new(1, "John Doe", "john@example.com", Role::Admin);
        assert!(RoleFilter::from("").accepts(&user));
    }

    #[test]
    fn query_pairs_survive_a_round_trip() {
        let mut q = TableQuery {
            search: "jane doe".into(),
            role: RoleFilter::Only(Role::User),
            sort: SortSpec::new(SortColumn::Email, SortDirection::Desc),
        };
        q.toggle_sort(SortColumn::Role);
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in q.to_query_pairs() {
            map.entry(k).or_default().push(v);
        }
        assert_eq!(TableQuery::from_query_pairs(&map).unwrap(), q);
    }

    #[test]
    fn empty_query_values_keep_defaults() {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        map.insert("sort".into(), vec!["".into()]);
        map.insert("role".into(), vec!["".into()]);
        assert_eq!(TableQuery::from_query_pairs(&map).unwrap(), TableQuery::default());
    }
}
