//! HTTP handlers for the library REST API.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::LibraryError;
use crate::server::state::ApiState;

/// Query parameters for `POST /books`.
#[derive(Debug, Deserialize)]
pub struct AddBookParams {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

/// Query parameters for `POST /books/{isbn}/borrow`.
#[derive(Debug, Deserialize)]
pub struct BorrowParams {
    pub user_id: String,
}

/// Body of a successful state change.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

fn bad_query(rejection: QueryRejection) -> Response {
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Map a service error to a response.
///
/// Lending failures are client errors (400), a duplicate ISBN is a
/// conflict (409), and storage failures are server errors (500).
fn library_error_response(err: LibraryError) -> Response {
    match err {
        LibraryError::Storage(e) => {
            tracing::error!(error = %e, "Storage failure while handling request");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Storage error")
        }
        LibraryError::DuplicateBook(_) => error_response(StatusCode::CONFLICT, err.to_string()),
        other => error_response(StatusCode::BAD_REQUEST, other.to_string()),
    }
}

/// Catalogue a new book.
///
/// POST /books?isbn=..&title=..&author=..
pub async fn add_book(
    State(state): State<ApiState>,
    params: Result<Query<AddBookParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(rejection),
    };

    match state
        .library
        .add_book(&params.isbn, &params.title, &params.author)
        .await
    {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => library_error_response(e),
    }
}

/// Fetch one book.
///
/// GET /books/{isbn}
pub async fn get_book(State(state): State<ApiState>, Path(isbn): Path<String>) -> Response {
    match state.library.get_book(&isbn).await {
        Ok(Some(book)) => (StatusCode::OK, Json(book)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Book not found"),
        Err(e) => library_error_response(e),
    }
}

/// Lend a book to a user.
///
/// POST /books/{isbn}/borrow?user_id=..
pub async fn borrow_book(
    State(state): State<ApiState>,
    Path(isbn): Path<String>,
    params: Result<Query<BorrowParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(rejection),
    };

    match state.library.borrow_book(&isbn, &params.user_id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Borrowed".to_string(),
            }),
        )
            .into_response(),
        Err(e) => library_error_response(e),
    }
}

/// Return a borrowed book.
///
/// POST /books/{isbn}/return
pub async fn return_book(State(state): State<ApiState>, Path(isbn): Path<String>) -> Response {
    match state.library.return_book(&isbn).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Returned".to_string(),
            }),
        )
            .into_response(),
        Err(e) => library_error_response(e),
    }
}

/// Books currently lent to a user.
///
/// GET /users/{user_id}/books
pub async fn user_books(State(state): State<ApiState>, Path(user_id): Path<String>) -> Response {
    match state.library.get_user_books(&user_id).await {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => library_error_response(e),
    }
}

/// Any route not listed in the router.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryBookRepository, InMemoryUserRepository};
    use crate::services::{LibraryService, LibraryServiceImpl};
    use std::sync::Arc;

    async fn mock_state() -> ApiState {
        let library = LibraryServiceImpl::new(
            Arc::new(InMemoryBookRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        );
        library.ensure_default_user().await.unwrap();
        ApiState::new(Arc::new(library))
    }

    fn add_params(isbn: &str) -> AddBookParams {
        AddBookParams {
            isbn: isbn.to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_then_get_book() {
        let state = mock_state().await;

        let response = add_book(State(state.clone()), Ok(Query(add_params("978-1")))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_book(State(state), Path("978-1".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_duplicate_is_conflict() {
        let state = mock_state().await;
        add_book(State(state.clone()), Ok(Query(add_params("978-1")))).await;

        let response = add_book(State(state), Ok(Query(add_params("978-1")))).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_missing_book_is_not_found() {
        let state = mock_state().await;
        let response = get_book(State(state), Path("nope".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_borrow_twice_is_bad_request() {
        let state = mock_state().await;
        add_book(State(state.clone()), Ok(Query(add_params("978-1")))).await;
        let params = || BorrowParams {
            user_id: "u1".to_string(),
        };

        let response = borrow_book(State(state.clone()), Path("978-1".to_string()), Ok(Query(params()))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = borrow_book(State(state), Path("978-1".to_string()), Ok(Query(params()))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_return_unborrowed_is_bad_request() {
        let state = mock_state().await;
        add_book(State(state.clone()), Ok(Query(add_params("978-1")))).await;

        let response = return_book(State(state), Path("978-1".to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_user_books_ok_for_unknown_user() {
        let state = mock_state().await;
        let response = user_books(State(state), Path("ghost".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_found_fallback_status() {
        assert_eq!(not_found().await.status(), StatusCode::NOT_FOUND);
    }
}
