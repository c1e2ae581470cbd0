//! Author routes.
//!
//! - GET /author - List all authors
//! - GET /author/book/{isbn} - Authors of a book
//! - POST /author/add - Add an author
//! - DELETE /author/delete/{id} - Delete an author

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use booky_core::{Author, AuthorId, Isbn};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParams};
use crate::state::AppState;

/// Response carrying a list of authors.
#[derive(Debug, Serialize)]
pub struct AuthorsResponse {
    pub authors: Vec<Author>,
}

/// Request body for POST /author/add.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAuthorRequest {
    pub new_author: Author,
}

/// GET /author - List all authors.
async fn list_authors(State(state): State<AppState>) -> Json<AuthorsResponse> {
    let authors = state.store().read().await.list_authors();
    Json(AuthorsResponse { authors })
}

/// GET /author/book/{isbn} - Authors of a book.
///
/// Not-found error if the book is unknown or has no authors.
async fn authors_by_book(
    State(state): State<AppState>,
    PathParams(isbn): PathParams<Isbn>,
) -> ApiResult<Json<AuthorsResponse>> {
    let authors = state.store().read().await.find_authors_by_book(&isbn)?;
    Ok(Json(AuthorsResponse { authors }))
}

/// POST /author/add - Add an author.
///
/// Body: `{ "newAuthor": { "id": 1, "name": "...", "books": [...] } }`.
/// Listed books get the author added to their author list.
async fn add_author(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddAuthorRequest>,
) -> ApiResult<Json<AuthorsResponse>> {
    let author_id = request.new_author.id;

    let authors = state
        .store()
        .mutate(|catalog| {
            catalog.add_author(request.new_author)?;
            Ok(catalog.list_authors())
        })
        .await?;

    tracing::info!(author_id = %author_id, "Author added");
    Ok(Json(AuthorsResponse { authors }))
}

/// DELETE /author/delete/{id} - Delete an author.
///
/// The author is removed from every book that listed them.
async fn delete_author(
    State(state): State<AppState>,
    PathParams(author_id): PathParams<AuthorId>,
) -> ApiResult<Json<AuthorsResponse>> {
    let authors = state
        .store()
        .mutate(|catalog| {
            catalog.delete_author(author_id)?;
            Ok(catalog.list_authors())
        })
        .await?;

    tracing::info!(author_id = %author_id, "Author deleted");
    Ok(Json(AuthorsResponse { authors }))
}

/// Build author routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/author", get(list_authors))
        .route("/author/book/{isbn}", get(authors_by_book))
        .route("/author/add", post(add_author))
        .route("/author/delete/{id}", delete(delete_author))
}
