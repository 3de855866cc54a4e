//! Storage contract for the engine.
//!
//! The store is authorization-agnostic and trusts its caller: it only ever
//! reports a missing id (`None` / `false`), never Forbidden or validation
//! errors. Deleting a parent does not cascade; callers that want cleanup
//! delete children first.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    Board, BoardId, BoardPatch, Card, CardId, CardPatch, Column, ColumnId, ColumnPatch, UserId,
    Workspace, WorkspaceId, WorkspacePatch,
};

/// Per-type create/read/update/delete/list-by-parent storage.
///
/// Update methods take a patch and apply it to the stored record in one step,
/// so a single record never sees a torn read-modify-write even with
/// concurrent writers. No cross-entity transaction exists: a sibling reorder
/// is a batch of independent per-item updates (last write wins per item).
#[async_trait]
pub trait EntityStore: Send + Sync {
    // Workspaces
    async fn insert_workspace(&self, workspace: Workspace) -> Result<()>;
    async fn workspace(&self, id: &WorkspaceId) -> Result<Option<Workspace>>;
    /// Workspaces whose member set contains `member`. Unordered.
    async fn workspaces_for_member(&self, member: &UserId) -> Result<Vec<Workspace>>;
    async fn update_workspace(
        &self,
        id: &WorkspaceId,
        patch: WorkspacePatch,
    ) -> Result<Option<Workspace>>;
    async fn delete_workspace(&self, id: &WorkspaceId) -> Result<bool>;

    // Boards
    async fn insert_board(&self, board: Board) -> Result<()>;
    async fn board(&self, id: &BoardId) -> Result<Option<Board>>;
    /// Boards in a workspace. Unordered.
    async fn boards_in_workspace(&self, workspace: &WorkspaceId) -> Result<Vec<Board>>;
    async fn update_board(&self, id: &BoardId, patch: BoardPatch) -> Result<Option<Board>>;
    async fn delete_board(&self, id: &BoardId) -> Result<bool>;

    // Columns
    async fn insert_column(&self, column: Column) -> Result<()>;
    async fn column(&self, id: &ColumnId) -> Result<Option<Column>>;
    /// Columns in a board, sorted ascending by `order`.
    async fn columns_in_board(&self, board: &BoardId) -> Result<Vec<Column>>;
    async fn update_column(&self, id: &ColumnId, patch: ColumnPatch) -> Result<Option<Column>>;
    async fn delete_column(&self, id: &ColumnId) -> Result<bool>;

    // Cards
    async fn insert_card(&self, card: Card) -> Result<()>;
    async fn card(&self, id: &CardId) -> Result<Option<Card>>;
    /// Cards in a column, sorted ascending by `order`.
    async fn cards_in_column(&self, column: &ColumnId) -> Result<Vec<Card>>;
    async fn update_card(&self, id: &CardId, patch: CardPatch) -> Result<Option<Card>>;
    async fn delete_card(&self, id: &CardId) -> Result<bool>;
}
