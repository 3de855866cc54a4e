//! DeltaskContext - storage access primitives for the engine.
//!
//! The context provides access, not logic: it resolves ids to entities and
//! hands out the store. Commands do all the work.

use std::sync::Arc;

use crate::error::{DeltaskError, Result};
use crate::store::{EntityStore, MemoryStore};
use crate::types::{Board, BoardId, Card, CardId, Column, ColumnId, Workspace, WorkspaceId};

/// Context passed to every command.
///
/// Holds the injected store; the access evaluator and ordering logic depend
/// only on this surface, never on a concrete store.
#[derive(Clone)]
pub struct DeltaskContext {
    store: Arc<dyn EntityStore>,
}

impl DeltaskContext {
    /// Create a context over an injected store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Create a context over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }

    // =========================================================================
    // Id resolution - maps a missing id to the entity's NotFound error
    // =========================================================================

    pub async fn workspace(&self, id: &WorkspaceId) -> Result<Workspace> {
        self.store
            .workspace(id)
            .await?
            .ok_or_else(|| DeltaskError::WorkspaceNotFound { id: id.to_string() })
    }

    pub async fn board(&self, id: &BoardId) -> Result<Board> {
        self.store
            .board(id)
            .await?
            .ok_or_else(|| DeltaskError::BoardNotFound { id: id.to_string() })
    }

    pub async fn column(&self, id: &ColumnId) -> Result<Column> {
        self.store
            .column(id)
            .await?
            .ok_or_else(|| DeltaskError::ColumnNotFound { id: id.to_string() })
    }

    pub async fn card(&self, id: &CardId) -> Result<Card> {
        self.store
            .card(id)
            .await?
            .ok_or_else(|| DeltaskError::CardNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    #[tokio::test]
    async fn test_resolution_maps_missing_to_not_found() {
        let ctx = DeltaskContext::in_memory();

        let err = ctx.workspace(&WorkspaceId::from("nope")).await.unwrap_err();
        assert!(matches!(err, DeltaskError::WorkspaceNotFound { .. }));

        let err = ctx.card(&CardId::from("nope")).await.unwrap_err();
        assert!(matches!(err, DeltaskError::CardNotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolution_finds_stored_entity() {
        let ctx = DeltaskContext::in_memory();
        let ws = Workspace::new("Team", UserId::from("u1"));
        let id = ws.id.clone();
        ctx.store().insert_workspace(ws).await.unwrap();

        let found = ctx.workspace(&id).await.unwrap();
        assert_eq!(found.name, "Team");
    }
}
