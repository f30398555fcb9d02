//! CLI command handlers, one per file.

mod check_id;
mod codes;
mod get;

pub use check_id::run_check_id;
pub use codes::run_codes;
pub use get::run_get;
