//! Workspace commands

mod add_member;
mod create;
mod delete;
mod get;
mod list;
mod remove_member;
mod rename;

pub use add_member::AddMember;
pub use create::CreateWorkspace;
pub use delete::DeleteWorkspace;
pub use get::GetWorkspace;
pub use list::ListWorkspaces;
pub use remove_member::RemoveMember;
pub use rename::RenameWorkspace;
