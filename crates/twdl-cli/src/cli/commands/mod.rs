//! CLI command handlers. Each command is in its own file.

mod get;
mod list;
mod tools;

pub use get::run_get;
#[cfg(test)]
pub(crate) use get::download_options;
pub use list::run_list;
pub use tools::run_tools;

/// Exit code when the target list is empty after cleaning.
pub const EXIT_NO_URLS: i32 = 2;
