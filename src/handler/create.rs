use crate::{
    Result,
    clock::Clock,
    handler::{
        request::RequestBody,
        response::{self, Reply},
    },
    item::{CreateItemRequest, Item},
    store::Store,
};

use lambda_http::{Body, Request, Response, http::StatusCode};
use serde::Serialize;
use tracing::info;

/// Message returned with a created item.
pub const CREATED_MESSAGE: &str = "Item created successfully";

#[derive(Debug, Serialize)]
struct CreateItemOutput {
    message: &'static str,
    item: Item,
}

/// Validate the body, build the item and write it.
///
/// The write is unconditional: a caller-supplied `id` that already exists
/// replaces the stored item.
pub async fn create_item<S: Store, C: Clock>(
    store: &S,
    clock: &C,
    body: RequestBody,
) -> Result<Reply> {
    let request: CreateItemRequest = body.parse()?;
    let item = request.into_item(clock.now())?;
    store.put_item(&item).await?;
    info!(id = %item.id, "item created");
    Reply::json(
        StatusCode::CREATED,
        &CreateItemOutput {
            message: CREATED_MESSAGE,
            item,
        },
    )
}

async fn run<S: Store, C: Clock>(store: &S, clock: &C, request: &Request) -> Result<Reply> {
    let body = RequestBody::try_from(request.body())?;
    create_item(store, clock, body).await
}

/// Lambda entry point for `POST` requests.
pub async fn handle<S: Store, C: Clock>(
    store: &S,
    clock: &C,
    request: Request,
) -> std::result::Result<Response<Body>, lambda_http::Error> {
    Ok(response::respond(run(store, clock, &request).await))
}
