//! In-memory entity store.
//!
//! The reference store: `RwLock`-guarded maps keyed by id. Patches are
//! applied under the write lock, which serializes mutation per record.
//! Suitable for tests and single-process deployments; a durable store is a
//! drop-in replacement behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::EntityStore;
use crate::error::Result;
use crate::types::{
    Board, BoardId, BoardPatch, Card, CardId, CardPatch, Column, ColumnId, ColumnPatch, UserId,
    Workspace, WorkspaceId, WorkspacePatch,
};

#[derive(Default)]
struct Tables {
    workspaces: HashMap<WorkspaceId, Workspace>,
    boards: HashMap<BoardId, Board>,
    columns: HashMap<ColumnId, Column>,
    cards: HashMap<CardId, Card>,
}

/// In-memory `EntityStore` implementation.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    // =========================================================================
    // Workspaces
    // =========================================================================

    async fn insert_workspace(&self, workspace: Workspace) -> Result<()> {
        debug!(id = %workspace.id, "insert workspace");
        let mut tables = self.tables.write().await;
        tables.workspaces.insert(workspace.id.clone(), workspace);
        Ok(())
    }

    async fn workspace(&self, id: &WorkspaceId) -> Result<Option<Workspace>> {
        let tables = self.tables.read().await;
        Ok(tables.workspaces.get(id).cloned())
    }

    async fn workspaces_for_member(&self, member: &UserId) -> Result<Vec<Workspace>> {
        let tables = self.tables.read().await;
        Ok(tables
            .workspaces
            .values()
            .filter(|ws| ws.is_member(member))
            .cloned()
            .collect())
    }

    async fn update_workspace(
        &self,
        id: &WorkspaceId,
        patch: WorkspacePatch,
    ) -> Result<Option<Workspace>> {
        let mut tables = self.tables.write().await;
        Ok(tables.workspaces.get_mut(id).map(|ws| {
            patch.apply(ws);
            ws.clone()
        }))
    }

    async fn delete_workspace(&self, id: &WorkspaceId) -> Result<bool> {
        debug!(%id, "delete workspace");
        let mut tables = self.tables.write().await;
        Ok(tables.workspaces.remove(id).is_some())
    }

    // =========================================================================
    // Boards
    // =========================================================================

    async fn insert_board(&self, board: Board) -> Result<()> {
        debug!(id = %board.id, workspace = %board.workspace, "insert board");
        let mut tables = self.tables.write().await;
        tables.boards.insert(board.id.clone(), board);
        Ok(())
    }

    async fn board(&self, id: &BoardId) -> Result<Option<Board>> {
        let tables = self.tables.read().await;
        Ok(tables.boards.get(id).cloned())
    }

    async fn boards_in_workspace(&self, workspace: &WorkspaceId) -> Result<Vec<Board>> {
        let tables = self.tables.read().await;
        Ok(tables
            .boards
            .values()
            .filter(|b| b.workspace == *workspace)
            .cloned()
            .collect())
    }

    async fn update_board(&self, id: &BoardId, patch: BoardPatch) -> Result<Option<Board>> {
        let mut tables = self.tables.write().await;
        Ok(tables.boards.get_mut(id).map(|board| {
            patch.apply(board);
            board.clone()
        }))
    }

    async fn delete_board(&self, id: &BoardId) -> Result<bool> {
        debug!(%id, "delete board");
        let mut tables = self.tables.write().await;
        Ok(tables.boards.remove(id).is_some())
    }

    // =========================================================================
    // Columns
    // =========================================================================

    async fn insert_column(&self, column: Column) -> Result<()> {
        debug!(id = %column.id, board = %column.board, order = column.order, "insert column");
        let mut tables = self.tables.write().await;
        tables.columns.insert(column.id.clone(), column);
        Ok(())
    }

    async fn column(&self, id: &ColumnId) -> Result<Option<Column>> {
        let tables = self.tables.read().await;
        Ok(tables.columns.get(id).cloned())
    }

    async fn columns_in_board(&self, board: &BoardId) -> Result<Vec<Column>> {
        let tables = self.tables.read().await;
        let mut columns: Vec<Column> = tables
            .columns
            .values()
            .filter(|c| c.board == *board)
            .cloned()
            .collect();
        // Equal orders can exist transiently under racing reorders; the id
        // tie-break keeps the listing deterministic until the batch settles.
        columns.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(columns)
    }

    async fn update_column(&self, id: &ColumnId, patch: ColumnPatch) -> Result<Option<Column>> {
        let mut tables = self.tables.write().await;
        Ok(tables.columns.get_mut(id).map(|column| {
            patch.apply(column);
            column.clone()
        }))
    }

    async fn delete_column(&self, id: &ColumnId) -> Result<bool> {
        debug!(%id, "delete column");
        let mut tables = self.tables.write().await;
        Ok(tables.columns.remove(id).is_some())
    }

    // =========================================================================
    // Cards
    // =========================================================================

    async fn insert_card(&self, card: Card) -> Result<()> {
        debug!(id = %card.id, column = %card.column, order = card.order, "insert card");
        let mut tables = self.tables.write().await;
        tables.cards.insert(card.id.clone(), card);
        Ok(())
    }

    async fn card(&self, id: &CardId) -> Result<Option<Card>> {
        let tables = self.tables.read().await;
        Ok(tables.cards.get(id).cloned())
    }

    async fn cards_in_column(&self, column: &ColumnId) -> Result<Vec<Card>> {
        let tables = self.tables.read().await;
        let mut cards: Vec<Card> = tables
            .cards
            .values()
            .filter(|c| c.column == *column)
            .cloned()
            .collect();
        cards.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(cards)
    }

    async fn update_card(&self, id: &CardId, patch: CardPatch) -> Result<Option<Card>> {
        let mut tables = self.tables.write().await;
        Ok(tables.cards.get_mut(id).map(|card| {
            patch.apply(card);
            card.clone()
        }))
    }

    async fn delete_card(&self, id: &CardId) -> Result<bool> {
        debug!(%id, "delete card");
        let mut tables = self.tables.write().await;
        Ok(tables.cards.remove(id).is_some())
    }
}
