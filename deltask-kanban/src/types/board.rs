//! Board: a container of columns, owned by exactly one workspace.

use serde::{Deserialize, Serialize};

use super::ids::{BoardId, UserId, WorkspaceId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    /// The owning workspace. Access to the board and everything under it is
    /// evaluated against this workspace's member set.
    pub workspace: WorkspaceId,
    /// Recorded at creation; renames are restricted to this user.
    pub created_by: UserId,
}

impl Board {
    pub fn new(title: impl Into<String>, workspace: WorkspaceId, created_by: UserId) -> Self {
        Self {
            id: BoardId::new(),
            title: title.into(),
            workspace,
            created_by,
        }
    }
}

/// Partial update for a board. Only the title is mutable; the owning
/// workspace and creator are fixed for the board's lifetime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardPatch {
    pub title: Option<String>,
}

impl BoardPatch {
    pub fn rename(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    pub fn apply(&self, board: &mut Board) {
        if let Some(title) = &self.title {
            board.title = title.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let ws = WorkspaceId::from("ws-1");
        let board = Board::new("Sprint 12", ws.clone(), UserId::from("u1"));
        assert_eq!(board.title, "Sprint 12");
        assert_eq!(board.workspace, ws);
        assert_eq!(board.created_by, UserId::from("u1"));
    }

    #[test]
    fn test_patch_rename() {
        let mut board = Board::new("Old", WorkspaceId::from("ws-1"), UserId::from("u1"));
        BoardPatch::rename("New").apply(&mut board);
        assert_eq!(board.title, "New");
    }
}
