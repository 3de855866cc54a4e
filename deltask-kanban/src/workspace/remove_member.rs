//! RemoveMember command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{UserId, WorkspaceId, WorkspacePatch};
use async_trait::async_trait;

/// Remove a member from a workspace (owner-only).
///
/// The owner cannot be removed - the owner-in-members invariant holds for
/// the workspace's entire lifetime. Removing a user who is not a member is a
/// no-op.
#[derive(Debug, Deserialize)]
pub struct RemoveMember {
    pub workspace: WorkspaceId,
    pub member: UserId,
    pub caller: UserId,
}

impl RemoveMember {
    pub fn new(
        workspace: impl Into<WorkspaceId>,
        member: impl Into<UserId>,
        caller: impl Into<UserId>,
    ) -> Self {
        Self {
            workspace: workspace.into(),
            member: member.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for RemoveMember {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let workspace = ctx.workspace(&self.workspace).await?;
        access::require_owner(&workspace, &self.caller, "remove workspace member")?;

        if workspace.is_owner(&self.member) {
            return Err(DeltaskError::invalid_value(
                "member",
                "the workspace owner cannot be removed",
            ));
        }

        let updated = ctx
            .store()
            .update_workspace(
                &self.workspace,
                WorkspacePatch::remove_member(self.member.clone()),
            )
            .await?
            .ok_or_else(|| DeltaskError::WorkspaceNotFound {
                id: self.workspace.to_string(),
            })?;

        Ok(serde_json::to_value(&updated)?)
    }
}
