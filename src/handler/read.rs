use crate::{
    Error, Result,
    handler::{
        request,
        response::{self, Reply},
    },
    item::Item,
    store::Store,
};

use lambda_http::{Body, Request, Response, http::StatusCode};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct GetItemOutput {
    item: Item,
}

#[derive(Debug, Serialize)]
struct ListItemsOutput {
    count: usize,
    items: Vec<Item>,
}

/// Fetch one item by `id`, or every item newest first when `id` is `None`.
pub async fn get_items<S: Store>(store: &S, id: Option<String>) -> Result<Reply> {
    match id {
        Some(id) => {
            let item = store.get_item(&id).await?;
            let item = item.ok_or_else(|| Error::NotFound(id))?;
            Reply::json(StatusCode::OK, &GetItemOutput { item })
        }
        None => {
            let mut items = store.scan_items().await?;
            Item::sort_newest_first(&mut items);
            info!(count = items.len(), "items listed");
            Reply::json(
                StatusCode::OK,
                &ListItemsOutput {
                    count: items.len(),
                    items,
                },
            )
        }
    }
}

/// Lambda entry point for `GET` requests.
pub async fn handle<S: Store>(
    store: &S,
    request: Request,
) -> std::result::Result<Response<Body>, lambda_http::Error> {
    let id = request::query_id(&request);
    Ok(response::respond(get_items(store, id).await))
}
