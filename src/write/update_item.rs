use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use indexmap::IndexMap;
use serde::{Serialize, ser};
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Render ordered assignments as a `SET` update expression.
///
/// Names and values always go through placeholders; values are numbered in
/// assignment order so the expression text is deterministic.
fn get_set_expression<T: Serialize>(set: IndexMap<String, T>) -> Result<common::ExpressionInput> {
    if set.is_empty() {
        return Err(ser::Error::custom(
            "an update needs at least one attribute to set",
        ));
    }
    let mut operations = Vec::with_capacity(set.len());
    for (index, (name, value)) in set.into_iter().enumerate() {
        let placeholder = common::name_placeholder(&name);
        let value_placeholder = format!(":set{index}");
        let value = to_attribute_value(value)?;
        let operation = common::ExpressionInput {
            expression: format!("{placeholder} = {value_placeholder}"),
            expression_attribute_names: collections::HashMap::from([(placeholder, name)]),
            expression_attribute_values: collections::HashMap::from([(value_placeholder, value)]),
        };
        operations.push(operation);
    }
    let mut operation = common::ExpressionInput::join(", ", operations);
    operation.expression = format!("SET {}", operation.expression);
    Ok(operation)
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    update_expression: common::ExpressionInput,
    write_args: write::common::WriteArgs,
}

/// Update item operation.
///
/// Every entry of `set` becomes one `SET` assignment, in insertion order.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use indexmap::IndexMap;
/// use items_crud::{common, write};
/// use serde_json::Value;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem {
///     key: common::key::Key::id(Value::String("item_1".to_string())),
///     set: IndexMap::from([
///         ("completed".to_string(), Value::Bool(true)),
///     ]),
///     write_args: write::common::WriteArgs {
///         table_name: "items".to_string(),
///     },
/// };
/// // builds: "SET #completed = :set0"
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem<T> {
    /// The primary key of the item to update.
    pub key: common::key::Key<T>,
    /// Attribute assignments, applied in order.
    pub set: IndexMap<String, T>,
    /// Additional write arguments (table name, return values).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<UpdateItem<T>> for UpdateItemInput {
    type Error = Error;

    fn try_from(update_item: UpdateItem<T>) -> Result<Self> {
        let key = update_item.key.try_into()?;
        let update_expression = get_set_expression(update_item.set)?;
        let operation = Self {
            key,
            update_expression,
            write_args: update_item.write_args,
        };
        Ok(operation)
    }
}

impl<T: Serialize> UpdateItem<T> {
    /// Execute the update item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        let expression = update_item.update_expression;
        let builder = client
            .update_item()
            .set_key(Some(update_item.key))
            .update_expression(expression.expression)
            .set_expression_attribute_names(Some(expression.expression_attribute_names))
            .set_expression_attribute_values(Some(expression.expression_attribute_values));
        crate::apply_write_args!(builder, update_item.write_args)
            .send()
            .await
    }
}
