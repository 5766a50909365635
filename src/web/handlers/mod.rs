//! Handlers for the single page and its form actions.

mod generate;
mod index;
mod login;
mod logout;
mod page;

pub use generate::{GenerateForm, generate_handler};
pub use index::index_handler;
pub use login::{LoginForm, login_handler};
pub use logout::logout_handler;
pub use page::{Flash, IndexTemplate};
