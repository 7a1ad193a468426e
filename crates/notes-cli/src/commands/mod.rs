mod add;
pub mod common;
pub mod completions;
pub mod config;
mod delete;
mod edit;
mod list;
pub mod shell;

pub use add::run_add;
pub use completions::run_completions;
pub use config::run_config;
pub use delete::{run_delete, run_restore};
pub use edit::run_edit;
pub use list::run_list;
pub use shell::run_shell;
