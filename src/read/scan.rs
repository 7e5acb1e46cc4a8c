use crate::read;

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

type RawItem = collections::HashMap<String, types::AttributeValue>;

/// Scan operation.
///
/// Follows `LastEvaluatedKey` until the table is exhausted and returns every
/// item of every page.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use items_crud::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     read_args: read::common::ReadArgs {
///         table_name: "items".to_string(),
///         ..Default::default()
///     },
/// };
/// let items = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan {
    /// Additional read arguments (table name, consistent read).
    pub read_args: read::common::ReadArgs,
}

impl Scan {
    /// Execute the scan operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<Vec<RawItem>, error::SdkError<operation::scan::ScanError>> {
        let builder = client.scan();
        let mut paginator = crate::apply_read_args!(builder, self.read_args)
            .into_paginator()
            .send();
        let mut outputs = Vec::new();
        while let Some(page) = paginator.next().await {
            outputs.push(page?);
        }
        Ok(merge_pages(outputs))
    }
}

fn merge_pages(outputs: Vec<operation::scan::ScanOutput>) -> Vec<RawItem> {
    outputs
        .into_iter()
        .filter_map(|output| output.items)
        .flatten()
        .collect()
}
