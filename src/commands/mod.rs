//! Command implementations

pub mod add;
pub mod filter;
pub mod get;
pub mod query;

pub use add::{run_add, ADHOC_FILE};
pub use filter::run_filter;
pub use get::run_get;
pub use query::run_query;
