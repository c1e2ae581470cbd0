//! Book routes.
//!
//! This module implements the book-related HTTP endpoints:
//! - GET / - List all books
//! - GET /is/{isbn} - Get a book by ISBN
//! - GET /c/{category} - List books in a category
//! - GET /l/{language} - List books in a language
//! - POST /book/add - Add a book
//! - PUT /book/update/title/{isbn} - Change a book's title
//! - PUT /book/update/author/{isbn}/{author_id} - Add an author to a book
//! - PUT /book/update/publication/isbn/{isbn} - Move a book to a publication
//! - DELETE /book/delete/{isbn} - Delete a book
//! - DELETE /book/delete/author/{isbn}/{author_id} - Remove an author from a book

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use booky_core::{Author, AuthorId, Book, Isbn, PublicationId};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParams};
use crate::routes::publications::BooksAndPublicationsResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response carrying the full book list.
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Response for GET /is/{isbn}.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub book: Book,
}

/// Response for mutations touching books and authors.
#[derive(Debug, Serialize)]
pub struct BooksAndAuthorsResponse {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
}

/// Request body for POST /book/add.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookRequest {
    pub new_book: Book,
}

/// Request body for PUT /book/update/title/{isbn}.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTitleRequest {
    pub new_book_title: String,
}

/// Request body for PUT /book/update/publication/isbn/{isbn}.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookPublicationRequest {
    /// Target publication, `0` to unpublish.
    pub new_book_publication: PublicationId,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET / - List all books.
async fn list_books(State(state): State<AppState>) -> Json<BooksResponse> {
    let books = state.store().read().await.list_books();
    Json(BooksResponse { books })
}

/// GET /is/{isbn} - Get a book by ISBN.
///
/// # Response
///
/// - 200 OK: `{ "book": {...} }`
/// - 200 OK: `{ "error": "No book found for the ISBN of ..." }` if unknown
async fn get_book(
    State(state): State<AppState>,
    PathParams(isbn): PathParams<Isbn>,
) -> ApiResult<Json<BookResponse>> {
    let catalog = state.store().read().await;
    let book = catalog.find_book(&isbn)?.clone();
    Ok(Json(BookResponse { book }))
}

/// GET /c/{category} - List books tagged with a category.
async fn books_by_category(
    State(state): State<AppState>,
    PathParams(category): PathParams<String>,
) -> ApiResult<Json<BooksResponse>> {
    let books = state.store().read().await.find_books_by_category(&category)?;
    Ok(Json(BooksResponse { books }))
}

/// GET /l/{language} - List books written in a language.
async fn books_by_language(
    State(state): State<AppState>,
    PathParams(language): PathParams<String>,
) -> ApiResult<Json<BooksResponse>> {
    let books = state.store().read().await.find_books_by_language(&language)?;
    Ok(Json(BooksResponse { books }))
}

/// POST /book/add - Add a book.
///
/// # Request
///
/// Body: `{ "newBook": { "ISBN": "...", "title": "...", ... } }`
///
/// # Response
///
/// - 200 OK: `{ "books": [...] }`
/// - 400 Bad Request: unknown author/publication referenced
/// - 409 Conflict: ISBN already in the catalog
async fn add_book(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddBookRequest>,
) -> ApiResult<Json<BooksResponse>> {
    let isbn = request.new_book.isbn.clone();

    let books = state
        .store()
        .mutate(|catalog| {
            catalog.add_book(request.new_book)?;
            Ok(catalog.list_books())
        })
        .await?;

    tracing::info!(isbn = %isbn, "Book added");
    Ok(Json(BooksResponse { books }))
}

/// PUT /book/update/title/{isbn} - Change a book's title.
///
/// Body: `{ "newBookTitle": "..." }`
async fn update_title(
    State(state): State<AppState>,
    PathParams(isbn): PathParams<Isbn>,
    JsonBody(request): JsonBody<UpdateTitleRequest>,
) -> ApiResult<Json<BooksResponse>> {
    let books = state
        .store()
        .mutate(|catalog| {
            catalog.update_book_title(&isbn, request.new_book_title)?;
            Ok(catalog.list_books())
        })
        .await?;

    tracing::info!(isbn = %isbn, "Book title updated");
    Ok(Json(BooksResponse { books }))
}

/// PUT /book/update/author/{isbn}/{author_id} - Add an author to a book.
///
/// Updates both the book's author list and the author's book list.
async fn add_author_to_book(
    State(state): State<AppState>,
    PathParams((isbn, author_id)): PathParams<(Isbn, AuthorId)>,
) -> ApiResult<Json<BooksAndAuthorsResponse>> {
    let response = state
        .store()
        .mutate(|catalog| {
            catalog.add_author_to_book(&isbn, author_id)?;
            Ok(BooksAndAuthorsResponse {
                books: catalog.list_books(),
                authors: catalog.list_authors(),
            })
        })
        .await?;

    tracing::info!(isbn = %isbn, author_id = %author_id, "Author linked to book");
    Ok(Json(response))
}

/// PUT /book/update/publication/isbn/{isbn} - Move a book to a publication.
///
/// Body: `{ "newBookPublication": 2 }`, or `0` to unpublish.
async fn update_book_publication(
    State(state): State<AppState>,
    PathParams(isbn): PathParams<Isbn>,
    JsonBody(request): JsonBody<UpdateBookPublicationRequest>,
) -> ApiResult<Json<BooksAndPublicationsResponse>> {
    let publication_id = request.new_book_publication;
    let response = state
        .store()
        .mutate(|catalog| {
            catalog.set_book_publication(&isbn, publication_id)?;
            Ok(BooksAndPublicationsResponse::from_catalog(catalog))
        })
        .await?;

    tracing::info!(isbn = %isbn, publication_id = %publication_id, "Book publication updated");
    Ok(Json(response))
}

/// DELETE /book/delete/{isbn} - Delete a book.
///
/// The ISBN is also removed from every author and publication.
async fn delete_book(
    State(state): State<AppState>,
    PathParams(isbn): PathParams<Isbn>,
) -> ApiResult<Json<BooksResponse>> {
    let books = state
        .store()
        .mutate(|catalog| {
            catalog.delete_book(&isbn)?;
            Ok(catalog.list_books())
        })
        .await?;

    tracing::info!(isbn = %isbn, "Book deleted");
    Ok(Json(BooksResponse { books }))
}

/// DELETE /book/delete/author/{isbn}/{author_id} - Remove an author from a book.
async fn remove_author_from_book(
    State(state): State<AppState>,
    PathParams((isbn, author_id)): PathParams<(Isbn, AuthorId)>,
) -> ApiResult<Json<BooksAndAuthorsResponse>> {
    let response = state
        .store()
        .mutate(|catalog| {
            catalog.remove_author_from_book(&isbn, author_id)?;
            Ok(BooksAndAuthorsResponse {
                books: catalog.list_books(),
                authors: catalog.list_authors(),
            })
        })
        .await?;

    tracing::info!(isbn = %isbn, author_id = %author_id, "Author unlinked from book");
    Ok(Json(response))
}

/// Build book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books))
        .route("/is/{isbn}", get(get_book))
        .route("/c/{category}", get(books_by_category))
        .route("/l/{language}", get(books_by_language))
        .route("/book/add", post(add_book))
        .route("/book/update/title/{isbn}", put(update_title))
        .route("/book/update/author/{isbn}/{author_id}", put(add_author_to_book))
        .route(
            "/book/update/publication/isbn/{isbn}",
            put(update_book_publication),
        )
        .route("/book/delete/{isbn}", delete(delete_book))
        .route(
            "/book/delete/author/{isbn}/{author_id}",
            delete(remove_author_from_book),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use booky_store::{Catalog, Store};

    use crate::config::ServerConfig;
    use crate::error::ApiError;

    fn state_with(catalog: Catalog) -> AppState {
        AppState::new(Store::from_catalog(catalog), ServerConfig::default())
    }

    fn one_book() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_book(Book::new("12345Book", "Getting started with MERN").with_category("tech"))
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_book_request_deserialize() {
        let json = r#"{"newBook": {"ISBN": "1", "title": "T", "numPage": 250, "category": ["a"]}}"#;
        let request: AddBookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.new_book.isbn, Isbn::new("1"));
        assert_eq!(request.new_book.num_page, 250);
    }

    #[test]
    fn test_update_requests_deserialize() {
        let title: UpdateTitleRequest =
            serde_json::from_str(r#"{"newBookTitle": "New"}"#).unwrap();
        assert_eq!(title.new_book_title, "New");

        let publication: UpdateBookPublicationRequest =
            serde_json::from_str(r#"{"newBookPublication": 2}"#).unwrap();
        assert_eq!(publication.new_book_publication, PublicationId(2));
    }

    #[tokio::test]
    async fn test_get_book_found_and_missing() {
        let state = state_with(one_book());

        let Json(response) = get_book(State(state.clone()), PathParams(Isbn::new("12345Book")))
            .await
            .unwrap();
        assert_eq!(response.book.title, "Getting started with MERN");

        let err = get_book(State(state), PathParams(Isbn::new("nope")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Store(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_books_by_category_without_match() {
        let state = state_with(one_book());
        let err = books_by_category(State(state), PathParams("poetry".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Store(ref e) if e.is_not_found()));
        assert_eq!(err.status_code(), http::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_title_returns_all_books() {
        let state = state_with(one_book());
        let Json(response) = update_title(
            State(state),
            PathParams(Isbn::new("12345Book")),
            JsonBody(UpdateTitleRequest {
                new_book_title: "MERN in Depth".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.books.len(), 1);
        assert_eq!(response.books[0].title, "MERN in Depth");
        assert!(response.books[0].has_category("tech"));
    }
}
