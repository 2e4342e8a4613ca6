// src/services/extractor.rs

//! Listing link extractor.
//!
//! Picks anchors whose href or text mentions one of the configured
//! keywords. The page has no stable structure to select on, so this is a
//! heuristic: a listing whose link and label both avoid every keyword is
//! missed.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Record, SourceConfig};
use crate::utils::url::{contains_any, normalize};

const ANCHOR_SELECTOR: &str = "a[href]";

/// Extracts unique listing records from a raw HTML document.
pub struct ListingExtractor {
    origin: String,
    keywords: Vec<String>,
    anchor_sel: Selector,
}

impl ListingExtractor {
    /// Create an extractor for the given source settings.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Self::with_keywords(&config.origin, &config.keywords)
    }

    /// Create an extractor with an explicit origin and keyword set.
    pub fn with_keywords(origin: &str, keywords: &[String]) -> Result<Self> {
        let keywords = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Ok(Self {
            origin: origin.trim_end_matches('/').to_string(),
            keywords,
            anchor_sel: Self::parse_selector(ANCHOR_SELECTOR)?,
        })
    }

    /// Extract matching records in document order, deduplicated by identifier.
    pub fn extract(&self, html: &str) -> Vec<Record> {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for anchor in document.select(&self.anchor_sel) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let identifier = normalize(&self.origin, href.trim());
            let label = anchor.text().collect::<String>().trim().to_string();

            if !self.matches(&identifier, &label) {
                continue;
            }
            if seen.insert(identifier.clone()) {
                records.push(Record { identifier, label });
            }
        }

        log::debug!("Extracted {} listing records", records.len());
        records
    }

    fn matches(&self, identifier: &str, label: &str) -> bool {
        contains_any(identifier, &self.keywords) || contains_any(label, &self.keywords)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}
