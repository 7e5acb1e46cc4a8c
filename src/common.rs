//! Common utilities for DynamoDB operations.
//!
//! This module provides the pieces shared by read and write operations: the
//! primary key of the items table and the placeholder plumbing used to build
//! expressions.

/// Key types for identifying items in the table.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

pub(crate) fn name_placeholder(name: &str) -> String {
    format!("#{name}")
}

fn get_expression(left: String, separator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{separator}{right}")
    }
}

/// expression operation
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn join(separator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, separator, item.expression);
        }
        operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn input(expression: &str, name: &str, value: &str) -> ExpressionInput {
        ExpressionInput {
            expression: expression.to_string(),
            expression_attribute_names: collections::HashMap::from([(
                name_placeholder(name),
                name.to_string(),
            )]),
            expression_attribute_values: collections::HashMap::from([(
                format!(":{name}"),
                types::AttributeValue::S(value.to_string()),
            )]),
        }
    }

    #[rstest]
    #[case::empty(vec![], "")]
    #[case::single(vec![input("#a = :a", "a", "x")], "#a = :a")]
    #[case::many(
        vec![
            input("#a = :a", "a", "x"),
            input("#b = :b", "b", "y"),
        ],
        "#a = :a, #b = :b"
    )]
    fn test_join(#[case] items: Vec<ExpressionInput>, #[case] expected: &str) {
        let count = items.len();
        let actual = ExpressionInput::join(", ", items);
        assert_eq!(actual.expression, expected);
        assert_eq!(actual.expression_attribute_names.len(), count);
        assert_eq!(actual.expression_attribute_values.len(), count);
    }
}
