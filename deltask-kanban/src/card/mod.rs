//! Card commands

mod create;
mod delete;
mod list;
mod mv;
mod update;

pub use create::CreateCard;
pub use delete::DeleteCard;
pub use list::ListCards;
pub use mv::MoveCard;
pub use update::UpdateCard;
