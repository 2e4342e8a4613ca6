//! Pipeline entry points for watcher operations.
//!
//! - `run_watch`: fetch, extract, notify new records, persist the seen set
//! - `run_preview`: same diff without notifying or persisting

pub mod diff;
pub mod watch;

pub use diff::{DiffResult, calculate_diff};
pub use watch::{run_preview, run_watch};
