use crate::{
    Result,
    common::key::Key,
    config::Config,
    item::{Item, ItemPatch, Timestamp},
    read,
    store::Store,
    write,
};

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use serde_dynamo::{from_item, from_items};
use serde_json::Value;
use std::collections::HashMap;
use tracing::instrument;

type RawItem = HashMap<String, AttributeValue>;

// A record that does not decode into an `Item` is a conversion error (500).
fn decode_item(raw: RawItem) -> Result<Item> {
    Ok(from_item(raw)?)
}

fn decode_items(raw: Vec<RawItem>) -> Result<Vec<Item>> {
    Ok(from_items(raw)?)
}

/// [`Store`] over a single DynamoDB table keyed by `id`.
///
/// Build one per process and share it by reference: the SDK client keeps its
/// connection pool across invocations.
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Wrap an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Build a client from the default AWS configuration chain (region,
    /// credentials, `AWS_ENDPOINT_URL`).
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Name of the backing table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    // Strongly consistent so the update handler's re-read sees its own write.
    fn read_args(&self) -> read::common::ReadArgs {
        read::common::ReadArgs {
            consistent_read: Some(true),
            table_name: self.table_name.clone(),
        }
    }

    fn write_args(&self) -> write::common::WriteArgs {
        write::common::WriteArgs {
            table_name: self.table_name.clone(),
        }
    }
}

#[async_trait]
impl Store for DynamoStore {
    #[instrument(name = "items_crud.get_item", skip(self), err)]
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let output = read::get_item::GetItem {
            key: Key::id(id),
            read_args: self.read_args(),
        }
        .send(&self.client)
        .await?;
        output.item.map(decode_item).transpose()
    }

    #[instrument(name = "items_crud.put_item", skip(self, item), fields(id = %item.id), err)]
    async fn put_item(&self, item: &Item) -> Result<()> {
        write::put_item::PutItem {
            item,
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[instrument(name = "items_crud.update_item", skip(self), err)]
    async fn update_item(&self, id: &str, patch: &ItemPatch, updated_at: Timestamp) -> Result<()> {
        write::update_item::UpdateItem {
            key: Key::id(Value::String(id.to_string())),
            set: patch.assignments(updated_at),
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[instrument(name = "items_crud.delete_item", skip(self), err)]
    async fn delete_item(&self, id: &str) -> Result<()> {
        write::delete_item::DeleteItem {
            key: Key::id(id),
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[instrument(name = "items_crud.scan_items", skip(self), err)]
    async fn scan_items(&self) -> Result<Vec<Item>> {
        let raw_items = read::scan::Scan {
            read_args: self.read_args(),
        }
        .send(&self.client)
        .await?;
        let items = decode_items(raw_items)?;
        tracing::debug!(count = items.len(), "scanned items");
        Ok(items)
    }
}
