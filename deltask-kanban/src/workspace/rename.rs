//! RenameWorkspace command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{UserId, WorkspaceId, WorkspacePatch};
use async_trait::async_trait;

/// Rename a workspace (owner-only)
#[derive(Debug, Deserialize)]
pub struct RenameWorkspace {
    pub id: WorkspaceId,
    /// The new name (required, non-blank)
    pub name: String,
    pub caller: UserId,
}

impl RenameWorkspace {
    pub fn new(
        id: impl Into<WorkspaceId>,
        name: impl Into<String>,
        caller: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for RenameWorkspace {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if self.name.trim().is_empty() {
            return Err(DeltaskError::missing_field("name"));
        }

        let workspace = ctx.workspace(&self.id).await?;
        access::require_owner(&workspace, &self.caller, "rename workspace")?;

        let updated = ctx
            .store()
            .update_workspace(&self.id, WorkspacePatch::rename(self.name.clone()))
            .await?
            .ok_or_else(|| DeltaskError::WorkspaceNotFound {
                id: self.id.to_string(),
            })?;

        Ok(serde_json::to_value(&updated)?)
    }
}
