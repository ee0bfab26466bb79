//! HTTP request handlers for the mock server.

pub mod animals;
pub mod oauth;
pub mod organizations;
pub mod types;

pub use animals::*;
pub use oauth::*;
pub use organizations::*;
pub use types::*;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::MockState;
use crate::{Link, Pagination, PaginationLinks, SearchParams};

/// Default page size for search endpoints.
const DEFAULT_LIMIT: u32 = 20;

/// Problem-details error body, as the real API returns.
pub(crate) fn problem(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "type": format!("https://www.petfinder.com/developers/v2/docs/errors/{}", status.as_u16()),
            "status": status.as_u16(),
            "title": status.canonical_reason().unwrap_or("Error"),
            "detail": detail
        })),
    )
        .into_response()
}

/// Reject the request unless it carries a valid bearer token.
pub(crate) fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(t) if state.is_token_valid(t) => Ok(()),
        _ => Err(problem(
            StatusCode::UNAUTHORIZED,
            "Access token invalid or expired",
        )),
    }
}

/// Slice one page out of `items` and build its pagination block.
///
/// `filters` are carried into the `next` and `previous` hrefs so that
/// following them stays within the filtered set. A page past the end, or one
/// whose offset does not fit, is empty.
pub(crate) fn paginate<T: Clone>(
    items: &[&T],
    page: Option<u32>,
    limit: Option<u32>,
    collection_path: &str,
    filters: &SearchParams,
) -> (Vec<T>, Pagination) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);
    let total = items.len() as u64;
    let total_pages = u32::try_from(items.len().div_ceil(limit as usize)).unwrap_or(u32::MAX);

    let slice: Vec<T> = (page - 1)
        .checked_mul(limit)
        .and_then(|start| usize::try_from(start).ok())
        .and_then(|start| items.get(start..))
        .map(|rest| rest.iter().take(limit as usize).map(|i| (*i).clone()).collect())
        .unwrap_or_default();

    let page_link = |target: u32| Link {
        href: Some(format!(
            "/v2{collection_path}{}",
            filters
                .clone()
                .with("page", target.to_string())
                .with("limit", limit.to_string())
                .create_query_string()
        )),
    };
    let next = (page < total_pages).then(|| page_link(page + 1));
    let previous = (page > 1).then(|| page_link(page - 1));

    let pagination = Pagination {
        count_per_page: Some(limit),
        total_count: Some(total),
        current_page: Some(page),
        total_pages: Some(total_pages),
        links: Some(PaginationLinks { previous, next }),
    };

    (slice, pagination)
}

/// Collect the filters a search request was made with.
pub(crate) fn active_filters<'a>(
    filters: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> SearchParams {
    filters
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    fn animals(n: u64) -> Vec<crate::Animal> {
        (1..=n)
            .map(|id| Fixtures::minimal_animal(id, "Rex", "Dog"))
            .collect()
    }

    #[test]
    fn test_paginate_middle_page() {
        let all = animals(5);
        let refs: Vec<_> = all.iter().collect();

        let (page, pagination) = paginate(&refs, Some(2), Some(2), "/animals", &SearchParams::new());

        assert_eq!(page.iter().map(|a| a.id).collect::<Vec<_>>(), vec![Some(3), Some(4)]);
        assert_eq!(pagination.total_pages, Some(3));
        assert_eq!(pagination.next_href(), Some("/v2/animals?page=3&limit=2"));
    }

    #[test]
    fn test_paginate_huge_page_is_empty() {
        let all = animals(1);
        let refs: Vec<_> = all.iter().collect();

        let (page, pagination) =
            paginate(&refs, Some(u32::MAX), Some(20), "/animals", &SearchParams::new());

        assert!(page.is_empty());
        assert_eq!(pagination.current_page, Some(u32::MAX));
        assert!(!pagination.has_next());
    }

    #[test]
    fn test_paginate_links_keep_filters() {
        let all = animals(3);
        let refs: Vec<_> = all.iter().collect();
        let filters = active_filters([
            ("type", Some("Dog")),
            ("coat", None),
            ("organization", Some("KY422")),
        ]);

        let (_, pagination) = paginate(&refs, Some(2), Some(1), "/animals", &filters);
        let links = pagination.links.unwrap();

        assert_eq!(
            links.next.and_then(|l| l.href).as_deref(),
            Some("/v2/animals?type=Dog&organization=KY422&page=3&limit=1")
        );
        assert_eq!(
            links.previous.and_then(|l| l.href).as_deref(),
            Some("/v2/animals?type=Dog&organization=KY422&page=1&limit=1")
        );
    }

    #[test]
    fn test_authorize_checks_issued_tokens() {
        let mut state = MockState::new();
        let token = state.issue_token();

        let mut headers = HeaderMap::new();
        assert!(authorize(&state, &headers).is_err());

        headers.insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
        assert!(authorize(&state, &headers).is_ok());

        headers.insert(AUTHORIZATION, "Bearer forged".parse().unwrap());
        let rejection = authorize(&state, &headers).unwrap_err();
        assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
    }
}
