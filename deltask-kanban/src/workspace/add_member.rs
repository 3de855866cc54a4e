//! AddMember command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{UserId, WorkspaceId, WorkspacePatch};
use async_trait::async_trait;

/// Add a member to a workspace (owner-only). Idempotent: adding an existing
/// member is a no-op.
#[derive(Debug, Deserialize)]
pub struct AddMember {
    pub workspace: WorkspaceId,
    pub member: UserId,
    pub caller: UserId,
}

impl AddMember {
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
impl Execute<DeltaskContext, DeltaskError> for AddMember {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let workspace = ctx.workspace(&self.workspace).await?;
        access::require_owner(&workspace, &self.caller, "add workspace member")?;

        let updated = ctx
            .store()
            .update_workspace(
                &self.workspace,
                WorkspacePatch::add_member(self.member.clone()),
            )
            .await?
            .ok_or_else(|| DeltaskError::WorkspaceNotFound {
                id: self.workspace.to_string(),
            })?;

        Ok(serde_json::to_value(&updated)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::CreateWorkspace;

    #[tokio::test]
    async fn test_owner_adds_member() {
        let ctx = DeltaskContext::in_memory();
        let ws = CreateWorkspace::new("Team", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        let result = AddMember::new(ws["id"].as_str().unwrap(), "bob", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["members"], serde_json::json!(["alice", "bob"]));
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let ctx = DeltaskContext::in_memory();
        let ws = CreateWorkspace::new("Team", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let id = ws["id"].as_str().unwrap();

        AddMember::new(id, "bob", "alice").execute(&ctx).await.unwrap();
        let result = AddMember::new(id, "bob", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["members"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_member_cannot_add() {
        let ctx = DeltaskContext::in_memory();
        let ws = CreateWorkspace::new("Team", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let id = ws["id"].as_str().unwrap();
        AddMember::new(id, "bob", "alice").execute(&ctx).await.unwrap();

        let result = AddMember::new(id, "carol", "bob").execute(&ctx).await;
        assert!(matches!(result, Err(DeltaskError::Forbidden { .. })));
    }
}
