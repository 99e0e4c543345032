//! Paging request as handed over by the transport adapter

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sort direction. Only the exact upper-case literals are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Lenient parse used for untrusted input: anything but `ASC`/`DESC` is `None`.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

/// Incoming paging parameters for a single pagination call.
///
/// Every field except `path` is optional; missing or non-positive values are
/// replaced by endpoint defaults during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingRequest {
    /// Requested page, 1-based
    pub page: Option<u64>,
    /// Requested page size
    pub limit: Option<u64>,
    /// Requested sort key (logical column name)
    pub sort_by: Option<String>,
    /// Requested sort direction
    pub order_by: Option<SortOrder>,
    /// Absolute base URL used verbatim as the link prefix
    pub path: String,
}

impl PagingRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_order_by(mut self, order_by: SortOrder) -> Self {
        self.order_by = Some(order_by);
        self
    }
}
