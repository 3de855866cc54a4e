//! DeleteWorkspace command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{UserId, WorkspaceId};
use async_trait::async_trait;

/// Delete a workspace (owner-only).
///
/// Boards under the workspace are not deleted; orphaning is the documented
/// behavior.
#[derive(Debug, Deserialize)]
pub struct DeleteWorkspace {
    pub id: WorkspaceId,
    pub caller: UserId,
}

impl DeleteWorkspace {
    pub fn new(id: impl Into<WorkspaceId>, caller: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for DeleteWorkspace {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let workspace = ctx.workspace(&self.id).await?;
        access::require_owner(&workspace, &self.caller, "delete workspace")?;

        ctx.store().delete_workspace(&self.id).await?;

        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string()
        }))
    }
}
