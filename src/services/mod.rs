//! Service layer for the watcher.
//!
//! - Listings page fetching (`HttpFetcher`)
//! - Keyword-based record extraction (`ListingExtractor`)
//! - Telegram notification dispatch (`TelegramNotifier`)

mod extractor;
mod fetcher;
mod notifier;

pub use extractor::ListingExtractor;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use notifier::{Notifier, TelegramNotifier};
