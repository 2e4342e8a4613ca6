// src/pipeline/watch.rs

//! One watcher pass: fetch, extract, diff, notify, persist.

use crate::error::Result;
use crate::models::{Config, Record, RunSummary, SeenSet};
use crate::services::{ListingExtractor, Notifier, PageFetcher};
use crate::storage::SeenStore;

use super::diff::{DiffResult, calculate_diff};

/// Run the watcher once.
///
/// A fetch failure aborts before the store is touched. Send failures are
/// logged and skipped; their identifiers are still persisted, so they are
/// not retried on the next run.
pub async fn run_watch(
    config: &Config,
    fetcher: &dyn PageFetcher,
    store: &dyn SeenStore,
    notifier: &dyn Notifier,
) -> Result<RunSummary> {
    let mut summary = RunSummary::started();
    let (records, diff) = collect(config, fetcher, store).await?;
    summary.extracted = records.len();
    summary.new = diff.change_count();

    if !diff.has_changes() {
        log::info!("No new listing links");
        return Ok(summary.finish());
    }

    log::info!("Sending {} new listing links", diff.added.len());
    for record in &diff.added {
        match notifier.send(record).await {
            Ok(()) => summary.delivered += 1,
            Err(error) => {
                summary.failed += 1;
                log::warn!("Failed to send {}: {}", record.identifier, error);
            }
        }
    }

    store.save(&diff.merged).await?;
    summary.persisted = true;

    let summary = summary.finish();
    log::info!(
        "Done: {} new links ({} delivered, {} failed) in {} ms",
        summary.new,
        summary.delivered,
        summary.failed,
        summary.elapsed_ms()
    );
    Ok(summary)
}

/// Run the fetch/extract/diff steps and report what would be sent.
///
/// Neither notifies nor persists.
pub async fn run_preview(
    config: &Config,
    fetcher: &dyn PageFetcher,
    store: &dyn SeenStore,
) -> Result<RunSummary> {
    let mut summary = RunSummary::started();
    let (records, diff) = collect(config, fetcher, store).await?;
    summary.extracted = records.len();
    summary.new = diff.change_count();

    if diff.has_changes() {
        for record in &diff.added {
            log::info!("Would send: {} ({})", record.identifier, record.label);
        }
    } else {
        log::info!("No new listing links");
    }

    Ok(summary.finish())
}

async fn collect(
    config: &Config,
    fetcher: &dyn PageFetcher,
    store: &dyn SeenStore,
) -> Result<(Vec<Record>, DiffResult)> {
    let extractor = ListingExtractor::new(&config.source)?;

    let html = fetcher.fetch(&config.source.url).await?;
    let records = extractor.extract(&html);
    log::info!("Found {} candidate links", records.len());

    let seen: SeenSet = store.load().await?;
    log::debug!("Loaded {} seen identifiers from {}", seen.len(), store.location());

    let diff = calculate_diff(&seen, &records);
    Ok((records, diff))
}
