//! Per-endpoint paginator configuration

use std::collections::HashMap;

use super::SortOrder;

/// Page size used when neither the request nor the endpoint sets one
pub const DEFAULT_LIMIT: u64 = 20;
/// Upper bound on page size when the endpoint does not set one
pub const DEFAULT_MAX_LIMIT: u64 = 100;
/// Largest row offset or page size handed to a data source. SQL backends bind
/// `LIMIT`/`OFFSET` as signed 64-bit integers.
pub const MAX_ROW_BOUND: u64 = i64::MAX as u64;

/// Static configuration for one paginated endpoint.
///
/// The filter (or pre-built query) is not part of this struct; it belongs to
/// the [`DataSource`](super::DataSource) chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatorConfig {
    /// Whitelisted sort keys. The first entry is the last-resort default.
    pub sortable_columns: Vec<String>,
    /// Logical sort key -> physical sort expression, for query-backed sources
    pub column_aliases: HashMap<String, String>,
    pub max_limit: u64,
    /// Only honoured when it is also listed in `sortable_columns`
    pub default_sort_by: Option<String>,
    pub default_order_by: SortOrder,
    pub default_limit: u64,
}

impl PaginatorConfig {
    pub fn new<I, S>(sortable_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sortable_columns: sortable_columns.into_iter().map(Into::into).collect(),
            column_aliases: HashMap::new(),
            max_limit: DEFAULT_MAX_LIMIT,
            default_sort_by: None,
            default_order_by: SortOrder::Asc,
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_column_alias(
        mut self,
        column: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        self.column_aliases.insert(column.into(), expression.into());
        self
    }

    pub fn with_max_limit(mut self, max_limit: u64) -> Self {
        self.max_limit = max_limit;
        self
    }

    pub fn with_default_sort_by(mut self, column: impl Into<String>) -> Self {
        self.default_sort_by = Some(column.into());
        self
    }

    pub fn with_default_order_by(mut self, order: SortOrder) -> Self {
        self.default_order_by = order;
        self
    }

    pub fn with_default_limit(mut self, limit: u64) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn is_sortable(&self, column: &str) -> bool {
        self.sortable_columns.iter().any(|c| c == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PaginatorConfig::new(["id"]);
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.max_limit, 100);
        assert_eq!(config.default_order_by, SortOrder::Asc);
        assert!(config.default_sort_by.is_none());
        assert!(config.column_aliases.is_empty());
    }

    #[test]
    fn is_sortable_matches_exactly() {
        let config = PaginatorConfig::new(["id", "date_created"]);
        assert!(config.is_sortable("date_created"));
        assert!(!config.is_sortable("dateCreated"));
        assert!(!config.is_sortable("ID"));
    }
}
