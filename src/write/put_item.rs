use crate::write;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};
use std::collections;

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: collections::HashMap<String, types::AttributeValue>,
    write_args: write::common::WriteArgs,
}

/// Put item operation.
///
/// Writes unconditionally: an existing item with the same key is replaced.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use items_crud::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: json!({"id": "item_1", "title": "Buy milk"}),
///     write_args: write::common::WriteArgs {
///         table_name: "items".to_string(),
///     },
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct PutItem<T> {
    /// The item to put into the table.
    pub item: T,
    /// Additional write arguments (table name).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<PutItem<T>> for PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = to_item(put_item.item)?;
        let operation = Self {
            item,
            write_args: put_item.write_args,
        };
        Ok(operation)
    }
}

impl<T: Serialize> PutItem<T> {
    /// Execute the put item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let put_item: PutItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client.put_item().set_item(Some(put_item.item));
        crate::apply_write_args!(builder, put_item.write_args)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::strings(
        PutItem {
            item: json!(
                {
                    "id": "a",
                    "title": "b"
                }
            ),
            write_args: write::common::WriteArgs {
                table_name: "c".to_string(),
            },
        },
        PutItemInput {
            item: collections::HashMap::from(
                [
                    (
                        "id".to_string(),
                        types::AttributeValue::S(
                            "a".to_string()
                        ),
                    ),
                    (
                        "title".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        ),
                    ),
                ]
            ),
            write_args: write::common::WriteArgs {
                table_name: "c".to_string(),
            },
        }
    )]
    #[case::boolean(
        PutItem {
            item: json!(
                {
                    "completed": false
                }
            ),
            write_args: write::common::WriteArgs {
                table_name: "d".to_string(),
            },
        },
        PutItemInput {
            item: collections::HashMap::from(
                [(
                    "completed".to_string(),
                    types::AttributeValue::Bool(false),
                )]
            ),
            write_args: write::common::WriteArgs {
                table_name: "d".to_string(),
            },
        }
    )]
    fn test_put_item(#[case] args: PutItem<Value>, #[case] expected: PutItemInput) {
        let actual: PutItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_put_item_rejects_non_map() {
        let args = PutItem {
            item: json!("not a map"),
            write_args: write::common::WriteArgs::default(),
        };
        let actual: Result<PutItemInput> = args.try_into();
        assert!(actual.is_err());
    }
}
