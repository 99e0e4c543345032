//! Sort column whitelisting and physical sort resolution

use crate::domain::{PaginationError, PaginationResult, PaginatorConfig};

/// Resolve the logical sort key.
///
/// Precedence: requested key, then configured default, then the first
/// sortable column. Keys outside the whitelist are ignored.
pub fn resolve_sort_column(
    requested: Option<&str>,
    config: &PaginatorConfig,
) -> PaginationResult<String> {
    let Some(first) = config.sortable_columns.first() else {
        return Err(PaginationError::Configuration(
            "no sortable columns configured".to_string(),
        ));
    };

    let resolved = requested
        .filter(|c| config.is_sortable(c))
        .or_else(|| {
            config
                .default_sort_by
                .as_deref()
                .filter(|c| config.is_sortable(c))
        })
        .unwrap_or(first);

    Ok(resolved.to_string())
}

/// Translate a resolved logical key into what the data source orders by.
///
/// Repository sources (no table alias) get the key unchanged. Query sources
/// get the configured alias expression, or `<table_alias>.<key>`.
pub fn physical_sort_expression(
    sort_by: &str,
    config: &PaginatorConfig,
    table_alias: Option<&str>,
) -> String {
    match table_alias {
        None => sort_by.to_string(),
        Some(alias) => config
            .column_aliases
            .get(sort_by)
            .cloned()
            .unwrap_or_else(|| format!("{}.{}", alias, sort_by)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_whitelist_is_a_configuration_error() {
        let config = PaginatorConfig::new(Vec::<String>::new());
        for requested in [None, Some("id"), Some("")] {
            let err = resolve_sort_column(requested, &config).unwrap_err();
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn requested_key_wins_when_whitelisted() {
        let config = PaginatorConfig::new(["id", "name"]).with_default_sort_by("id");
        assert_eq!(resolve_sort_column(Some("name"), &config).unwrap(), "name");
    }

    #[test]
    fn unknown_requested_key_falls_back_to_default() {
        let config = PaginatorConfig::new(["id", "date_created"]).with_default_sort_by("date_created");
        assert_eq!(
            resolve_sort_column(Some("password"), &config).unwrap(),
            "date_created"
        );
        assert_eq!(resolve_sort_column(None, &config).unwrap(), "date_created");
    }

    #[test]
    fn default_outside_whitelist_falls_back_to_first_column() {
        let config = PaginatorConfig::new(["id"]).with_default_sort_by("date_created");
        assert_eq!(resolve_sort_column(None, &config).unwrap(), "id");
    }

    #[test]
    fn first_column_without_default() {
        let config = PaginatorConfig::new(["id", "name"]);
        assert_eq!(resolve_sort_column(None, &config).unwrap(), "id");
    }

    #[test]
    fn repository_sources_get_logical_key() {
        let config = PaginatorConfig::new(["id"]).with_column_alias("id", "c.cat_id");
        assert_eq!(physical_sort_expression("id", &config, None), "id");
    }

    #[test]
    fn query_sources_use_alias_map_then_table_alias() {
        let config = PaginatorConfig::new(["id", "dateCreated"])
            .with_column_alias("dateCreated", "cats.date_created");

        assert_eq!(
            physical_sort_expression("dateCreated", &config, Some("cats")),
            "cats.date_created"
        );
        assert_eq!(physical_sort_expression("id", &config, Some("c")), "c.id");
    }
}
