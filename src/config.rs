//! Process configuration read from the environment.

use crate::{Error, Result};

use std::env;

/// Environment variable naming the items table.
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Handler configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name of the DynamoDB table holding the items.
    pub table_name: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let table_name = lookup(TABLE_NAME_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(Error::Config(TABLE_NAME_VAR))?;
        Ok(Self { table_name })
    }
}
