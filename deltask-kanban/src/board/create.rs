//! CreateBoard command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{Board, UserId, WorkspaceId};
use async_trait::async_trait;

/// Create a board in a workspace (members only). The caller is recorded as
/// the board's creator.
#[derive(Debug, Deserialize)]
pub struct CreateBoard {
    pub workspace: WorkspaceId,
    /// The board title (required, non-blank)
    pub title: String,
    pub caller: UserId,
}

impl CreateBoard {
    pub fn new(
        workspace: impl Into<WorkspaceId>,
        title: impl Into<String>,
        caller: impl Into<UserId>,
    ) -> Self {
        Self {
            workspace: workspace.into(),
            title: title.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for CreateBoard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if self.title.trim().is_empty() {
            return Err(DeltaskError::missing_field("title"));
        }

        let workspace = ctx.workspace(&self.workspace).await?;
        access::require_member(&workspace, &self.caller, "create board")?;

        let board = Board::new(self.title.clone(), workspace.id, self.caller.clone());
        ctx.store().insert_board(board.clone()).await?;

        Ok(serde_json::to_value(&board)?)
    }
}
