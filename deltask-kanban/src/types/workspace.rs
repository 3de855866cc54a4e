//! Workspace: the top-level container governing access to everything below it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::{UserId, WorkspaceId};

/// A workspace owns boards and carries the member set that every access
/// decision below it resolves against. The owner is always a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub owner: UserId,
    pub members: BTreeSet<UserId>,
}

impl Workspace {
    /// Create a workspace owned by `owner`, with the owner as sole member.
    pub fn new(name: impl Into<String>, owner: UserId) -> Self {
        let mut members = BTreeSet::new();
        members.insert(owner.clone());
        Self {
            id: WorkspaceId::new(),
            name: name.into(),
            owner,
            members,
        }
    }

    pub fn is_owner(&self, user: &UserId) -> bool {
        self.owner == *user
    }

    pub fn is_member(&self, user: &UserId) -> bool {
        self.members.contains(user)
    }
}

/// Partial update for a workspace. Applied by the store under its write lock.
///
/// Membership changes are expressed as add/remove deltas rather than a
/// whole-set replacement so two concurrent member changes cannot silently
/// drop each other.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspacePatch {
    pub name: Option<String>,
    pub add_member: Option<UserId>,
    pub remove_member: Option<UserId>,
}

impl WorkspacePatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn add_member(member: UserId) -> Self {
        Self {
            add_member: Some(member),
            ..Self::default()
        }
    }

    pub fn remove_member(member: UserId) -> Self {
        Self {
            remove_member: Some(member),
            ..Self::default()
        }
    }

    /// Apply the patch. The owner is re-inserted unconditionally so no patch
    /// can break the owner-in-members invariant.
    pub fn apply(&self, workspace: &mut Workspace) {
        if let Some(name) = &self.name {
            workspace.name = name.clone();
        }
        if let Some(member) = &self.add_member {
            workspace.members.insert(member.clone());
        }
        if let Some(member) = &self.remove_member {
            workspace.members.remove(member);
        }
        workspace.members.insert(workspace.owner.clone());
    }
}
