//! Paging request extractor for Axum
//!
//! `Paginator` reads `page`, `limit`, `sortBy` and `orderBy` from the query
//! string and the absolute request URL used as the link prefix. It never
//! rejects: malformed values are dropped and replaced by endpoint defaults
//! later on. Each key is read on its own, and the first occurrence of a
//! repeated key wins.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri, Query};
use axum::http::header::HOST;
use axum::http::request::Parts;
use utoipa::IntoParams;

use crate::domain::{PagingRequest, SortOrder};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Raw paging query parameters, kept as strings so bad input never rejects
/// the request.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PagingQuery {
    /// Page number, starting at 1
    pub page: Option<String>,
    /// Page size, capped by the endpoint maximum
    pub limit: Option<String>,
    /// Sort column; must be one of the endpoint's sortable columns
    pub sort_by: Option<String>,
    /// `ASC` or `DESC`
    pub order_by: Option<String>,
}

impl PagingQuery {
    /// Collect the paging keys from decoded query pairs; other keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "sortBy" => &mut query.sort_by,
                "orderBy" => &mut query.order_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    pub fn into_request(self, path: impl Into<String>) -> PagingRequest {
        PagingRequest {
            page: self.page.as_deref().and_then(parse_positive),
            limit: self.limit.as_deref().and_then(parse_positive),
            sort_by: self.sort_by.filter(|s| !s.is_empty()),
            order_by: self.order_by.as_deref().and_then(SortOrder::parse_lenient),
            path: path.into(),
        }
    }
}

fn parse_positive(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|&n| n > 0)
}

/// Extracted paging request.
///
/// ```ignore
/// async fn handler(Paginator(request): Paginator) {
///     let page = paginate(&request, &source, &config).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Paginator(pub PagingRequest);

impl<S> FromRequestParts<S> for Paginator
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| PagingQuery::from_pairs(pairs))
            .unwrap_or_default();

        Ok(Paginator(query.into_request(request_url(parts))))
    }
}

/// `<scheme>://<host><path>`, with the path as seen before any `nest` stripping.
fn request_url(parts: &Parts) -> String {
    let scheme = parts
        .headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .or_else(|| parts.uri.scheme_str())
        .unwrap_or("http");

    let host = parts
        .headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| parts.uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    let path = parts
        .extensions
        .get::<OriginalUri>()
        .map(|uri| uri.path())
        .unwrap_or_else(|| parts.uri.path());

    format!("{}://{}{}", scheme, host, path)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn handler(Paginator(req): Paginator) -> Json<Value> {
        Json(json!({
            "page": req.page,
            "limit": req.limit,
            "sortBy": req.sort_by,
            "orderBy": req.order_by,
            "path": req.path,
        }))
    }

    fn app() -> Router {
        Router::new().nest("/items", Router::new().route("/all", get(handler)))
    }

    async fn extract(uri: &str) -> Value {
        let req = Request::builder()
            .uri(uri)
            .header("host", "localhost")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn undefined_query_fields() {
        let value = extract("/items/all").await;
        assert_eq!(
            value,
            json!({
                "page": null,
                "limit": null,
                "sortBy": null,
                "orderBy": null,
                "path": "http://localhost/items/all",
            })
        );
    }

    #[tokio::test]
    async fn defined_query_fields() {
        let value = extract("/items/all?page=1&limit=20&sortBy=id&orderBy=ASC").await;
        assert_eq!(
            value,
            json!({
                "page": 1,
                "limit": 20,
                "sortBy": "id",
                "orderBy": "ASC",
                "path": "http://localhost/items/all",
            })
        );
    }

    #[tokio::test]
    async fn malformed_fields_are_dropped() {
        let value = extract("/items/all?page=abc&limit=-3&orderBy=desc&sortBy=").await;
        assert_eq!(value["page"], Value::Null);
        assert_eq!(value["limit"], Value::Null);
        assert_eq!(value["orderBy"], Value::Null);
        assert_eq!(value["sortBy"], Value::Null);
    }

    #[tokio::test]
    async fn zero_page_is_dropped() {
        let value = extract("/items/all?page=0&limit=5").await;
        assert_eq!(value["page"], Value::Null);
        assert_eq!(value["limit"], 5);
    }

    #[tokio::test]
    async fn forwarded_proto_is_honoured() {
        let req = Request::builder()
            .uri("/items/all")
            .header("host", "api.example.com")
            .header("x-forwarded-proto", "https")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["path"], "https://api.example.com/items/all");
    }

    #[tokio::test]
    async fn repeated_key_keeps_first_value_and_other_fields() {
        let value = extract("/items/all?page=2&page=7&limit=5&sortBy=name&orderBy=DESC").await;
        assert_eq!(value["page"], 2);
        assert_eq!(value["limit"], 5);
        assert_eq!(value["sortBy"], "name");
        assert_eq!(value["orderBy"], "DESC");
    }

    #[test]
    fn from_pairs_ignores_unknown_keys() {
        let query = PagingQuery::from_pairs([("color", "black"), ("limit", "3"), ("limit", "9")]);
        assert_eq!(
            query,
            PagingQuery {
                limit: Some("3".to_string()),
                ..PagingQuery::default()
            }
        );
    }

    #[test]
    fn into_request_parses_leniently() {
        let query = PagingQuery {
            page: Some(" 3 ".to_string()),
            limit: Some("2.5".to_string()),
            sort_by: Some("name".to_string()),
            order_by: Some("DESC".to_string()),
        };
        let req = query.into_request("/cats");
        assert_eq!(req.page, Some(3));
        assert_eq!(req.limit, None);
        assert_eq!(req.sort_by.as_deref(), Some("name"));
        assert_eq!(req.order_by, Some(SortOrder::Desc));
        assert_eq!(req.path, "/cats");
    }
}
