//! Listing record data structure.

use std::collections::BTreeSet;

/// Set of identifiers already notified in earlier runs.
///
/// Ordered so that persisting it yields lexicographically sorted lines.
pub type SeenSet = BTreeSet<String>;

/// A candidate listing entry extracted from the listings page.
///
/// Identity is the identifier alone; the label is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Normalized absolute URL
    pub identifier: String,

    /// Trimmed anchor text (may be empty)
    pub label: String,
}

impl Record {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
        }
    }

    /// Format the record for display using a template.
    ///
    /// Supported placeholders: `{label}`, `{link}`.
    /// Placeholders are substituted in one pass, so braces inside the
    /// label or link are never expanded again.
    pub fn format(&self, template: &str) -> String {
        let mut out =
            String::with_capacity(template.len() + self.label.len() + self.identifier.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{label}") {
                out.push_str(&self.label);
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{link}") {
                out.push_str(&self.identifier);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}
