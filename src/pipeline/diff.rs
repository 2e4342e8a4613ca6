//! Diff calculation between extracted records and the seen set.

use crate::models::{Record, SeenSet};

/// Result of comparing one run's records with the seen set.
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// Records not seen before, in extraction order
    pub added: Vec<Record>,
    /// Seen set to persist after notifying: previous ∪ all extracted
    pub merged: SeenSet,
}

impl DiffResult {
    /// Check if there are any new records.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }

    /// Number of new records.
    pub fn change_count(&self) -> usize {
        self.added.len()
    }
}

/// Calculate new records and the merged seen set.
pub fn calculate_diff(previous: &SeenSet, current: &[Record]) -> DiffResult {
    let added = current
        .iter()
        .filter(|record| !previous.contains(&record.identifier))
        .cloned()
        .collect();

    let mut merged = previous.clone();
    merged.extend(current.iter().map(|record| record.identifier.clone()));

    DiffResult { added, merged }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Record {
        Record::new(format!("https://www.idx.co.id/{id}"), format!("Label {id}"))
    }

    fn seen(ids: &[&str]) -> SeenSet {
        ids.iter()
            .map(|id| format!("https://www.idx.co.id/{id}"))
            .collect()
    }

    #[test]
    fn test_no_changes() {
        let curr = vec![record("ipo/1"), record("ipo/2")];
        let prev = seen(&["ipo/1", "ipo/2"]);

        let result = calculate_diff(&prev, &curr);
        assert!(!result.has_changes());
        assert_eq!(result.change_count(), 0);
        assert_eq!(result.merged, prev);
    }

    #[test]
    fn test_additions_keep_extraction_order() {
        let curr = vec![record("ipo/3"), record("ipo/1"), record("ipo/2")];
        let prev = seen(&["ipo/1"]);

        let result = calculate_diff(&prev, &curr);
        let ids: Vec<_> = result.added.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(
            ids,
            vec!["https://www.idx.co.id/ipo/3", "https://www.idx.co.id/ipo/2"]
        );
    }

    #[test]
    fn test_merged_never_drops_previous() {
        let curr = vec![record("ipo/new")];
        let prev = seen(&["ipo/old-1", "ipo/old-2"]);

        let result = calculate_diff(&prev, &curr);
        assert_eq!(result.merged.len(), 3);
        assert!(result.merged.is_superset(&prev));
        assert!(result.merged.contains("https://www.idx.co.id/ipo/new"));
    }

    #[test]
    fn test_empty_to_full() {
        let result = calculate_diff(&SeenSet::new(), &[record("ipo/1")]);
        assert_eq!(result.added.len(), 1);
        assert_eq!(result.merged.len(), 1);
    }

    #[test]
    fn test_nothing_extracted() {
        let prev = seen(&["ipo/1"]);
        let result = calculate_diff(&prev, &[]);
        assert!(!result.has_changes());
        assert_eq!(result.merged, prev);
    }
}
