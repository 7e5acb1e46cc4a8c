use crate::{
    Error, Result,
    handler::{
        request,
        response::{self, Reply},
    },
    store::Store,
};

use lambda_http::{Body, Request, Response, http::StatusCode};
use serde::Serialize;
use tracing::info;

/// Message returned with a deleted identifier.
pub const DELETED_MESSAGE: &str = "Item deleted successfully";

#[derive(Debug, Serialize)]
struct DeleteItemOutput {
    message: &'static str,
    id: String,
}

/// Delete the item `id`.
///
/// Existence is checked with a read first so deleting an unknown id is a 404
/// rather than a silent success; the check and the delete are not atomic.
pub async fn delete_item<S: Store>(store: &S, id: Option<String>) -> Result<Reply> {
    let id = id.ok_or_else(|| Error::Validation("item id is required".to_string()))?;
    if store.get_item(&id).await?.is_none() {
        return Err(Error::NotFound(id));
    }
    store.delete_item(&id).await?;
    info!(id = %id, "item deleted");
    Reply::json(
        StatusCode::OK,
        &DeleteItemOutput {
            message: DELETED_MESSAGE,
            id,
        },
    )
}

/// Lambda entry point for `DELETE` requests.
pub async fn handle<S: Store>(
    store: &S,
    request: Request,
) -> std::result::Result<Response<Body>, lambda_http::Error> {
    let id = request::path_id(&request);
    Ok(response::respond(delete_item(store, id).await))
}
