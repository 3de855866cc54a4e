//! The `Execute` trait for engine operations.
//!
//! Operations are structs where the fields ARE the parameters. Each operation
//! file pairs a command struct with one `Execute` impl; the command carries
//! the already-resolved caller identity where the operation is authorized.

use async_trait::async_trait;
use serde_json::Value;

/// An executable command over a context `C`, failing with error `E`.
///
/// Successful executions return the affected entity (or entity list) as JSON.
#[async_trait]
pub trait Execute<C, E> {
    async fn execute(&self, ctx: &C) -> std::result::Result<Value, E>;
}
