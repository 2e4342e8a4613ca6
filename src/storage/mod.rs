//! Storage abstractions for the seen set.
//!
//! The seen set is the only state carried between runs: one identifier per
//! line, sorted on write.
//!
//! ```text
//! seen_links.txt
//! https://www.idx.co.id/id/perusahaan-tercatat/aktivitas-pencatatan/ipo-a
//! https://www.idx.co.id/listing/b
//! ```

pub mod local;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SeenSet;

// Re-export for convenience
pub use local::FileSeenStore;
pub use memory::MemorySeenStore;

/// Trait for seen-set storage backends.
#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Load every identifier recorded so far. A missing store is empty.
    async fn load(&self) -> Result<SeenSet>;

    /// Replace the stored set with `seen`.
    ///
    /// Callers pass the union of the loaded set and the current run's
    /// identifiers, never a subset.
    async fn save(&self, seen: &SeenSet) -> Result<()>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Parse line-delimited identifiers, skipping blank lines.
pub fn parse_lines(content: &str) -> SeenSet {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Render identifiers one per line in sorted order.
pub fn render_lines(seen: &SeenSet) -> String {
    let mut out = String::with_capacity(seen.iter().map(|id| id.len() + 1).sum());
    for id in seen {
        out.push_str(id);
        out.push('\n');
    }
    out
}
