//! Search query model: equality filters, sort order and paging window.

use chrono::{DateTime, SecondsFormat, Utc};

/// Storage type of a filterable or sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Timestamp,
}

/// A field exposed to callers: its public name and the column behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: ColumnKind,
}

impl Field {
    pub const fn integer(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            kind: ColumnKind::Integer,
        }
    }

    pub const fn timestamp(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            kind: ColumnKind::Timestamp,
        }
    }

    /// Case-insensitive lookup by public name.
    pub fn find<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
        fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

/// A typed filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterValue {
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl FilterValue {
    /// Canonical text form, as written back into link query strings.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Timestamp(t) => t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// An exact-match predicate on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub field: &'static Field,
    pub value: FilterValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` in any case is descending; anything else is ascending.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// The column and direction a search is actually ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: &'static Field,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Match `sort_by` against the allow-list. An unknown field falls back to
    /// the key in ascending order, whatever direction was asked for.
    pub fn resolve(
        sortable: &'static [Field],
        key: &'static Field,
        sort_by: &str,
        direction: SortDirection,
    ) -> Self {
        match Field::find(sortable, sort_by) {
            Some(field) => Self { field, direction },
            None => Self {
                field: key,
                direction: SortDirection::Asc,
            },
        }
    }
}

/// A normalized search: filters plus a valid paging window.
///
/// `page` is at least 1 and `page_size` lies in `1..=100` once the search
/// service has built it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub filters: Vec<Filter>,
    pub page: u32,
    pub page_size: u32,
    /// Sort field. After [`SearchQuery::resolve_sort`] this is the canonical
    /// name of the field actually ordered by.
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl SearchQuery {
    /// Rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Replace the requested sort with the order that will be applied, so
    /// that links built from this query describe the returned ordering.
    pub fn resolve_sort(&mut self, sortable: &'static [Field], key: &'static Field) {
        let order = SortOrder::resolve(sortable, key, &self.sort_by, self.sort_dir);
        self.sort_by = order.field.name.to_string();
        self.sort_dir = order.direction;
    }
}
