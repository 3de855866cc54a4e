//! DeleteBoard command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{BoardId, UserId};
use async_trait::async_trait;

/// Delete a board. Allowed for the board's creator or the workspace owner.
///
/// Columns and cards under the board are not deleted; orphaning is the
/// documented behavior.
#[derive(Debug, Deserialize)]
pub struct DeleteBoard {
    pub id: BoardId,
    pub caller: UserId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>, caller: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for DeleteBoard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let board = ctx.board(&self.id).await?;
        let workspace = access::workspace_of_board(ctx, &board).await?;

        if board.created_by != self.caller && !workspace.is_owner(&self.caller) {
            return Err(DeltaskError::forbidden("delete board"));
        }

        ctx.store().delete_board(&self.id).await?;

        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string()
        }))
    }
}
