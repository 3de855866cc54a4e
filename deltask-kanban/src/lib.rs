//! Kanban workspace engine with pluggable entity storage
//!
//! This crate implements a four-level containment hierarchy - workspace ->
//! board -> column -> card - with membership-based access evaluation and an
//! integer position-index scheme for ordering columns within a board and
//! cards within a column.
//!
//! ## Overview
//!
//! - **Commands** - every operation is a struct executed against a
//!   [`DeltaskContext`]; the struct fields are the parameters, including the
//!   already-resolved caller identity. Authentication lives outside this
//!   crate.
//! - **Access evaluation** - each operation climbs the containment chain to
//!   the governing workspace and checks the caller against its member set
//!   (see [`access`]). Broken chain links surface as NotFound, failed
//!   predicates as Forbidden.
//! - **Ordering** - new columns and cards append at the end of their sibling
//!   sequence; reorders are per-item order overwrites (see [`ordering`]).
//! - **Storage** - injected behind the [`store::EntityStore`] trait; the
//!   bundled [`store::MemoryStore`] backs tests and single-process use.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use deltask_kanban::{DeltaskContext, Execute};
//! use deltask_kanban::types::UserId;
//! use deltask_kanban::workspace::CreateWorkspace;
//! use deltask_kanban::board::CreateBoard;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = DeltaskContext::in_memory();
//! let alice = UserId::from("alice");
//!
//! let ws = CreateWorkspace::new("Platform", alice.clone())
//!     .execute(&ctx)
//!     .await?;
//!
//! let board = CreateBoard::new(ws["id"].as_str().unwrap(), "Sprint 12", alice)
//!     .execute(&ctx)
//!     .await?;
//!
//! println!("Created board: {}", board["id"]);
//! # Ok(())
//! # }
//! ```

pub mod access;
mod context;
mod error;
mod execute;
pub mod ordering;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod card;
pub mod column;
pub mod workspace;

pub use context::DeltaskContext;
pub use error::{DeltaskError, ErrorKind, Result};
pub use execute::Execute;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Card, CardId, ChecklistItem, Column, ColumnId, UserId, Workspace, WorkspaceId,
};
