use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Attribute name of the partition key of the items table.
pub const ID_ATTRIBUTE: &str = "id";

/// Partition key of a single item.
///
/// The items table has no sort key, so one attribute identifies an item.
///
/// ```rust
/// use items_crud::common::key;
///
/// let key = key::Key::id("item_1");
/// assert_eq!(key.name, "id");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl<T> Key<T> {
    /// Key addressing an item by its `id` attribute.
    pub fn id(value: T) -> Self {
        Self {
            name: ID_ATTRIBUTE.to_string(),
            value,
        }
    }
}

impl<T: Serialize> TryFrom<Key<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(key: Key<T>) -> Result<Self> {
        let value = to_attribute_value(key.value)?;
        Ok(Self::from([(key.name, value)]))
    }
}
