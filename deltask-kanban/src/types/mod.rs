//! Core types for the kanban workspace engine

mod board;
mod card;
mod column;
mod ids;
mod workspace;

// Re-export all types
pub use board::{Board, BoardPatch};
pub use card::{Card, CardPatch, ChecklistItem};
pub use column::{Column, ColumnPatch};
pub use ids::{BoardId, CardId, ColumnId, UserId, WorkspaceId};
pub use workspace::{Workspace, WorkspacePatch};
