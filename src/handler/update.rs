use crate::{
    Error, Result,
    clock::Clock,
    handler::{
        request::{self, RequestBody},
        response::{self, Reply},
    },
    item::{Item, ItemPatch},
    store::Store,
};

use lambda_http::{Body, Request, Response, http::StatusCode};
use serde::Serialize;
use tracing::info;

/// Message returned with an updated item.
pub const UPDATED_MESSAGE: &str = "Item updated successfully";

#[derive(Debug, Serialize)]
struct UpdateItemOutput {
    message: &'static str,
    item: Item,
}

/// Apply the fields present in `body` to the item `id` and refresh
/// `updated_at`.
///
/// An empty `title` is a 400, like a missing `id`: an item never loses its
/// title. Existence is checked with a read before the write; the two calls are
/// not atomic. The returned item is read back from the store after the write.
pub async fn update_item<S: Store, C: Clock>(
    store: &S,
    clock: &C,
    id: Option<String>,
    body: RequestBody,
) -> Result<Reply> {
    let id = id.ok_or_else(|| Error::Validation("item id is required".to_string()))?;
    let patch: ItemPatch = body.parse()?;
    patch.validate()?;

    if store.get_item(&id).await?.is_none() {
        return Err(Error::NotFound(id));
    }
    store.update_item(&id, &patch, clock.now()).await?;

    // A concurrent delete between the write and this read surfaces as 404.
    let item = store.get_item(&id).await?;
    let item = item.ok_or_else(|| Error::NotFound(id))?;
    info!(id = %item.id, "item updated");
    Reply::json(
        StatusCode::OK,
        &UpdateItemOutput {
            message: UPDATED_MESSAGE,
            item,
        },
    )
}

async fn run<S: Store, C: Clock>(store: &S, clock: &C, request: &Request) -> Result<Reply> {
    let body = RequestBody::try_from(request.body())?;
    update_item(store, clock, request::path_id(request), body).await
}

/// Lambda entry point for `PUT` requests.
pub async fn handle<S: Store, C: Clock>(
    store: &S,
    clock: &C,
    request: Request,
) -> std::result::Result<Response<Body>, lambda_http::Error> {
    Ok(response::respond(run(store, clock, &request).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        clock::manual::ManualClock,
        handler::{
            create::create_item,
            testing::{body_json, text},
        },
        store::memory::MemoryStore,
    };

    use chrono::Duration;
    use lambda_http::RequestExt;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn seeded(store: &MemoryStore, clock: &ManualClock) -> Item {
        let body = text(json!({"id": "a", "title": "Buy milk", "description": "2 litres"}));
        let reply = create_item(store, clock, body).await.unwrap();
        serde_json::from_value(reply.body["item"].clone()).unwrap()
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let error = update_item(
            &MemoryStore::new(),
            &ManualClock::new(),
            None,
            text(json!({"completed": true})),
        )
        .await
        .unwrap_err();
        assert!(matches!(error, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let store = MemoryStore::new();
        let error = update_item(
            &store,
            &ManualClock::new(),
            Some("missing".to_string()),
            text(json!({"completed": true})),
        )
        .await
        .unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_update_completed_only() {
        let store = MemoryStore::new();
        let clock = ManualClock::new();
        let before = seeded(&store, &clock).await;
        clock.advance(Duration::milliseconds(10));

        let reply = update_item(
            &store,
            &clock,
            Some("a".to_string()),
            text(json!({"completed": true})),
        )
        .await
        .unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["message"], UPDATED_MESSAGE);

        let after: Item = serde_json::from_value(reply.body["item"].clone()).unwrap();
        assert!(after.completed);
        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[rstest]
    #[case::empty_patch(json!({}))]
    #[case::null_fields(json!({"title": null, "description": null}))]
    #[tokio::test]
    async fn test_update_refreshes_timestamp_only(#[case] body: Value) {
        let store = MemoryStore::new();
        let clock = ManualClock::new();
        let before = seeded(&store, &clock).await;
        clock.advance(Duration::seconds(1));

        update_item(&store, &clock, Some("a".to_string()), text(body))
            .await
            .unwrap();
        let after = store.get_item("a").await.unwrap().unwrap();
        assert_eq!(
            after,
            Item {
                updated_at: clock.now(),
                ..before
            }
        );
    }

    #[tokio::test]
    async fn test_update_rejects_empty_title() {
        let store = MemoryStore::new();
        let clock = ManualClock::new();
        let before = seeded(&store, &clock).await;
        let error = update_item(&store, &clock, Some("a".to_string()), text(json!({"title": ""})))
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(store.get_item("a").await.unwrap(), Some(before));
    }

    #[tokio::test]
    async fn test_handle_reads_path_parameter() {
        let store = MemoryStore::new();
        let clock = ManualClock::new();
        seeded(&store, &clock).await;

        let request = Request::new(Body::from(r#"{"title": "Buy bread"}"#)).with_path_parameters(
            HashMap::from([("id".to_string(), vec!["a".to_string()])]),
        );
        let response = handle(&store, &clock, request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response)["item"]["title"], "Buy bread");

        let response = handle(&store, &clock, Request::new(Body::Empty))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_empty_title_is_bad_request() {
        let store = MemoryStore::new();
        let clock = ManualClock::new();
        seeded(&store, &clock).await;

        let request = Request::new(Body::from(r#"{"title": ""}"#)).with_path_parameters(
            HashMap::from([("id".to_string(), vec!["a".to_string()])]),
        );
        let response = handle(&store, &clock, request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(&response)["error"].is_string());
    }
}
