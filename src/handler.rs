//! Request handlers, one per HTTP operation.
//!
//! Each handler is stateless: it validates its input, checks existence where
//! needed, makes its store calls and shapes the response. Every failure is
//! turned into a JSON error response at the handler boundary.
//!
//! | Handler | Method | Input | Success | Client errors |
//! |---|---|---|---|---|
//! | [`create`] | `POST` | JSON body | 201 `{message, item}` | 400 missing or empty `title` |
//! | [`read`] | `GET` | optional `id` query parameter | 200 `{item}` or `{count, items}` | 404 unknown `id` |
//! | [`update`] | `PUT` | `id` path parameter, JSON body | 200 `{message, item}` | 400 missing `id`, 400 empty `title`, 404 unknown `id` |
//! | [`delete`] | `DELETE` | `id` path parameter | 200 `{message, id}` | 400 missing `id`, 404 unknown `id` |
//!
//! Any other failure (malformed JSON, a store error, a record that does not
//! decode) is a 500 `{error}`.

/// Create handler.
pub mod create;

/// Delete handler.
pub mod delete;

/// Read handler: one item or the full list.
pub mod read;

/// Request decoding.
pub mod request;

/// Response shaping.
pub mod response;

/// Update handler.
pub mod update;
