//! Command implementations for registry-cli

pub mod build;
pub mod completions;
pub mod list;
pub mod validate;

pub use build::run_build;
pub use completions::run_completions;
pub use list::run_list;
pub use validate::run_validate;
