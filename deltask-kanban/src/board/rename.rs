//! RenameBoard command

use serde::Deserialize;
use serde_json::Value;

use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{BoardId, BoardPatch, UserId};
use async_trait::async_trait;

/// Rename a board. Restricted to the board's creator - membership alone is
/// not enough at this level.
#[derive(Debug, Deserialize)]
pub struct RenameBoard {
    pub id: BoardId,
    /// The new title (required, non-blank)
    pub title: String,
    pub caller: UserId,
}

impl RenameBoard {
    pub fn new(
        id: impl Into<BoardId>,
        title: impl Into<String>,
        caller: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for RenameBoard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if self.title.trim().is_empty() {
            return Err(DeltaskError::missing_field("title"));
        }

        let board = ctx.board(&self.id).await?;
        if board.created_by != self.caller {
            return Err(DeltaskError::forbidden("rename board"));
        }

        let updated = ctx
            .store()
            .update_board(&self.id, BoardPatch::rename(self.title.clone()))
            .await?
            .ok_or_else(|| DeltaskError::BoardNotFound {
                id: self.id.to_string(),
            })?;

        Ok(serde_json::to_value(&updated)?)
    }
}
