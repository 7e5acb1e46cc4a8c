#![deny(missing_docs)]

//! # Items CRUD
//!
//! Create, read, update and delete "item" records stored in a DynamoDB table,
//! served by four independent AWS Lambda handlers behind an HTTP gateway.
//!
//! ## Overview
//!
//! - [`mod@handler`] holds the four handlers. Each is stateless and generic over
//!   a [`store::Store`], so it runs against DynamoDB in production and an
//!   in-memory map in tests.
//! - [`mod@read`] and [`mod@write`] are typed DynamoDB operations: keys and
//!   update assignments are structured values, and the expression strings and
//!   placeholder maps are built from them.
//! - [`mod@item`] is the record and the typed request bodies.
//!
//! ## Quick Example
//!
//! ```no_run
//! use items_crud::{clock::SystemClock, config::Config, handler, store::dynamo::DynamoStore};
//! use lambda_http::{Error, Request, run, service_fn};
//!
//! # async fn example() -> Result<(), Error> {
//! let config = Config::from_env()?;
//! let store = DynamoStore::from_config(&config).await;
//! run(service_fn(|request: Request| {
//!     handler::create::handle(&store, &SystemClock, request)
//! }))
//! .await
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Primary key and expression placeholders
//! - [`mod@read`] - Read operations (GetItem, Scan)
//! - [`mod@write`] - Write operations (PutItem, UpdateItem, DeleteItem)
//! - [`mod@store`] - Persistence seam and its DynamoDB implementation
//! - [`mod@handler`] - The create, read, update and delete handlers

/// Wall-clock source for item timestamps.
pub mod clock;

/// Common utilities for keys and expressions.
pub mod common;

/// Environment configuration.
pub mod config;

/// Error type and HTTP status mapping.
pub mod error;

/// Lambda request handlers.
pub mod handler;

/// The item record and request bodies.
pub mod item;

/// Tracing subscriber setup.
pub mod logging;

/// Read operations for retrieving data from DynamoDB tables.
pub mod read;

/// Item persistence.
pub mod store;

/// Write operations for modifying data in DynamoDB tables.
pub mod write;

pub use error::{Error, Result};
