//! Column commands

mod create;
mod delete;
mod list;
mod update;

pub use create::CreateColumn;
pub use delete::DeleteColumn;
pub use list::ListColumns;
pub use update::UpdateColumn;
