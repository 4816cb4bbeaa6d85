//! # Simulated REST Endpoints
//!
//! An in-process stand-in for an HTTP resource at `/books`. No socket is ever
//! opened: each endpoint calls the [`BiblioApi`] and folds the outcome into a
//! status/message/payload triple the way an HTTP handler would.
//!
//! | Endpoint          | Success | Failures      |
//! |-------------------|---------|---------------|
//! | `GET /books/{id}` | 200     | 400, 404, 500 |
//! | `GET /books`      | 200     | 500           |
//! | `POST /books`     | 201     | 400, 500      |

use crate::api::BiblioApi;
use crate::error::{BiblioError, Result};
use crate::model::{BookId, BookView};
use crate::store::CatalogStore;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;

/// Body of `POST /books`. Every field may be missing; validation decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<i32>,
}

impl BookRequest {
    pub fn new(title: &str, author: &str, publication_year: i32) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            publication_year: Some(publication_year),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> RestResponse<T> {
    fn success(status: u16, data: T) -> Self {
        Self {
            status,
            message: reason_phrase(status).to_string(),
            data: Some(data),
        }
    }

    fn failure(err: &BiblioError) -> Self {
        let status = err.status_code();
        Self {
            status,
            message: format!("{}: {}", reason_phrase(status), err),
            data: None,
        }
    }

    fn from_result(status: u16, result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::success(status, data),
            Err(err) => Self::failure(&err),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for RestResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status, self.message)?;
        if let Some(data) = &self.data {
            write!(f, " {:?}", data)?;
        }
        Ok(())
    }
}

pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}

/// `GET /books/{id}`
pub fn get_book<S: CatalogStore>(
    api: &BiblioApi<S>,
    id: Option<BookId>,
) -> RestResponse<BookView> {
    RestResponse::from_result(OK, api.get_book(id).and_then(|r| r.into_book()))
}

/// `GET /books`
pub fn list_books<S: CatalogStore>(api: &BiblioApi<S>) -> RestResponse<Vec<BookView>> {
    RestResponse::from_result(OK, api.list_books().map(|r| r.books))
}

/// `POST /books`
pub fn post_book<S: CatalogStore>(
    api: &mut BiblioApi<S>,
    request: &BookRequest,
) -> RestResponse<BookView> {
    let result = api
        .create_book(
            request.title.as_deref(),
            request.author.as_deref(),
            request.publication_year,
        )
        .and_then(|r| r.into_book());
    RestResponse::from_result(CREATED, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> BiblioApi<InMemoryStore> {
        BiblioApi::new(InMemoryStore::seeded()).with_current_year(2026)
    }

    #[test]
    fn get_maps_outcomes_to_statuses() {
        let api = api();

        let found = get_book(&api, Some(1));
        assert_eq!(found.status, 200);
        assert_eq!(found.message, "OK");
        assert_eq!(found.data.unwrap().title, "El Quijote");

        let missing = get_book(&api, Some(404));
        assert_eq!(missing.status, 404);
        assert!(missing.data.is_none());

        assert_eq!(get_book(&api, None).status, 400);
        assert_eq!(get_book(&api, Some(-5)).status, 400);
    }

    #[test]
    fn post_creates_or_rejects() {
        let mut api = api();

        let created = post_book(
            &mut api,
            &BookRequest::new("The Pragmatic Programmer", "David Thomas", 1999),
        );
        assert_eq!(created.status, 201);
        assert_eq!(created.message, "Created");
        assert_eq!(created.data.unwrap().id, 6);

        let rejected = post_book(&mut api, &BookRequest::new("", "Invalid Author", 2023));
        assert_eq!(rejected.status, 400);
        assert!(rejected.message.starts_with("Bad Request: "));
        assert!(rejected.message.contains("title cannot be empty"));
        assert_eq!(api.store().count(), 6);
    }

    #[test]
    fn post_with_missing_fields_is_bad_request() {
        let mut api = api();
        let response = post_book(&mut api, &BookRequest::default());
        assert_eq!(response.status, 400);
    }

    #[test]
    fn list_returns_everything() {
        let response = list_books(&api());
        assert_eq!(response.status, 200);
        assert_eq!(response.data.unwrap().len(), 5);
    }

    #[test]
    fn request_reads_camel_case_json() {
        let request: BookRequest = serde_json::from_str(
            r#"{"title":"Dune","author":"Frank Herbert","publicationYear":1965}"#,
        )
        .unwrap();
        assert_eq!(request, BookRequest::new("Dune", "Frank Herbert", 1965));

        let partial: BookRequest = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(partial.author, None);
    }

    #[test]
    fn internal_errors_are_500() {
        let response: RestResponse<BookView> =
            RestResponse::failure(&BiblioError::Store("broken".into()));
        assert_eq!(response.status, 500);
        assert_eq!(response.message, "Internal Server Error: Store error: broken");
    }

    #[test]
    fn display_includes_status_line() {
        let response = get_book(&api(), Some(404));
        assert_eq!(
            response.to_string(),
            "HTTP 404 Not Found: Book not found with id: 404"
        );
    }
}
