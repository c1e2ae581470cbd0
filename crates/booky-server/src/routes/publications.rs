//! Publication routes.
//!
//! - GET /publications - List all publications
//! - GET /publications/book/{isbn} - Publication of a book
//! - POST /publication/add - Add a publication
//! - PUT /publication/update/book/{isbn} - Move a book to a publication
//! - DELETE /publication/delete/book/{isbn}/{publication_id} - Unpublish a book
//! - DELETE /publication/delete/{id} - Delete a publication

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use booky_core::{Book, Isbn, Publication, PublicationId};
use booky_store::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParams};
use crate::state::AppState;

/// Response carrying a list of publications.
#[derive(Debug, Serialize)]
pub struct PublicationsResponse {
    pub publications: Vec<Publication>,
}

/// Response for mutations touching books and publications.
#[derive(Debug, Serialize)]
pub struct BooksAndPublicationsResponse {
    pub books: Vec<Book>,
    pub publications: Vec<Publication>,
}

impl BooksAndPublicationsResponse {
    pub(crate) fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            books: catalog.list_books(),
            publications: catalog.list_publications(),
        }
    }
}

/// Request body for POST /publication/add.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPublicationRequest {
    pub new_publication: Publication,
}

/// Request body for PUT /publication/update/book/{isbn}.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublicationBookRequest {
    /// Target publication, `0` to unpublish.
    pub pub_id: PublicationId,
}

/// GET /publications - List all publications.
async fn list_publications(State(state): State<AppState>) -> Json<PublicationsResponse> {
    let publications = state.store().read().await.list_publications();
    Json(PublicationsResponse { publications })
}

/// GET /publications/book/{isbn} - Publication of a book.
///
/// Not-found error if the book is unknown or unpublished.
async fn publications_by_book(
    State(state): State<AppState>,
    PathParams(isbn): PathParams<Isbn>,
) -> ApiResult<Json<PublicationsResponse>> {
    let publications = state.store().read().await.find_publications_by_book(&isbn)?;
    Ok(Json(PublicationsResponse { publications }))
}

/// POST /publication/add - Add a publication.
///
/// Body: `{ "newPublication": { "id": 2, "name": "...", "books": [...] } }`.
/// Listed books move onto the new publication.
async fn add_publication(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddPublicationRequest>,
) -> ApiResult<Json<PublicationsResponse>> {
    let publication_id = request.new_publication.id;

    let publications = state
        .store()
        .mutate(|catalog| {
            catalog.add_publication(request.new_publication)?;
            Ok(catalog.list_publications())
        })
        .await?;

    tracing::info!(publication_id = %publication_id, "Publication added");
    Ok(Json(PublicationsResponse { publications }))
}

/// PUT /publication/update/book/{isbn} - Move a book to a publication.
///
/// Body: `{ "pubId": 2 }`. Updates the book and both the old and new
/// publication.
async fn update_publication_book(
    State(state): State<AppState>,
    PathParams(isbn): PathParams<Isbn>,
    JsonBody(request): JsonBody<UpdatePublicationBookRequest>,
) -> ApiResult<Json<BooksAndPublicationsResponse>> {
    let publication_id = request.pub_id;
    let response = state
        .store()
        .mutate(|catalog| {
            catalog.set_book_publication(&isbn, publication_id)?;
            Ok(BooksAndPublicationsResponse::from_catalog(catalog))
        })
        .await?;

    tracing::info!(isbn = %isbn, publication_id = %publication_id, "Book moved to publication");
    Ok(Json(response))
}

/// DELETE /publication/delete/book/{isbn}/{publication_id} - Unpublish a book.
async fn remove_book_from_publication(
    State(state): State<AppState>,
    PathParams((isbn, publication_id)): PathParams<(Isbn, PublicationId)>,
) -> ApiResult<Json<BooksAndPublicationsResponse>> {
    let response = state
        .store()
        .mutate(|catalog| {
            catalog.remove_book_from_publication(&isbn, publication_id)?;
            Ok(BooksAndPublicationsResponse::from_catalog(catalog))
        })
        .await?;

    tracing::info!(isbn = %isbn, publication_id = %publication_id, "Book removed from publication");
    Ok(Json(response))
}

/// DELETE /publication/delete/{id} - Delete a publication.
///
/// Books it published become unpublished.
async fn delete_publication(
    State(state): State<AppState>,
    PathParams(publication_id): PathParams<PublicationId>,
) -> ApiResult<Json<PublicationsResponse>> {
    let publications = state
        .store()
        .mutate(|catalog| {
            catalog.delete_publication(publication_id)?;
            Ok(catalog.list_publications())
        })
        .await?;

    tracing::info!(publication_id = %publication_id, "Publication deleted");
    Ok(Json(PublicationsResponse { publications }))
}

/// Build publication routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/publications", get(list_publications))
        .route("/publications/book/{isbn}", get(publications_by_book))
        .route("/publication/add", post(add_publication))
        .route(
            "/publication/update/book/{isbn}",
            put(update_publication_book),
        )
        .route(
            "/publication/delete/book/{isbn}/{publication_id}",
            delete(remove_book_from_publication),
        )
        .route("/publication/delete/{id}", delete(delete_publication))
}

#[cfg(test)]
mod tests {
    use super::*;
    use booky_store::Store;

    use crate::config::ServerConfig;

    #[test]
    fn test_update_publication_book_request_deserialize() {
        let request: UpdatePublicationBookRequest =
            serde_json::from_str(r#"{"pubId": 0}"#).unwrap();
        assert!(request.pub_id.is_unpublished());
    }

    #[tokio::test]
    async fn test_add_publication_then_delete() {
        let state = AppState::new(Store::default(), ServerConfig::default());

        let Json(added) = add_publication(
            State(state.clone()),
            JsonBody(AddPublicationRequest {
                new_publication: Publication::new(1, "Writex"),
            }),
        )
        .await
        .unwrap();
        assert_eq!(added.publications.len(), 1);

        let Json(remaining) = delete_publication(State(state), PathParams(PublicationId(1)))
            .await
            .unwrap();
        assert!(remaining.publications.is_empty());
    }

    #[tokio::test]
    async fn test_reserved_publication_id_is_bad_request() {
        let state = AppState::new(Store::default(), ServerConfig::default());
        let err = add_publication(
            State(state),
            JsonBody(AddPublicationRequest {
                new_publication: Publication::new(0, "Nobody"),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
    }
}
