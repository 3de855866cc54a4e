//! ListBoards command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{UserId, WorkspaceId};
use async_trait::async_trait;

/// List the boards of a workspace (members only)
#[derive(Debug, Deserialize)]
pub struct ListBoards {
    pub workspace: WorkspaceId,
    pub caller: UserId,
}

impl ListBoards {
    pub fn new(workspace: impl Into<WorkspaceId>, caller: impl Into<UserId>) -> Self {
        Self {
            workspace: workspace.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for ListBoards {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let workspace = ctx.workspace(&self.workspace).await?;
        access::require_member(&workspace, &self.caller, "list boards")?;

        let boards = ctx.store().boards_in_workspace(&workspace.id).await?;
        Ok(serde_json::to_value(&boards)?)
    }
}
