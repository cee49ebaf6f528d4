use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter value meaning "leave this filter inactive", so UI selectors can
/// send their default option verbatim.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A sortable field name plus the direction to read it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Caller-supplied description of one derived view: free-text search,
/// categorical filters, and an optional sort.
///
/// Filters naming unknown fields are ignored rather than rejected; the
/// sort key, by contrast, must name a declared sortable field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl QueryDescriptor {
    pub fn sorted_by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: Some(SortSpec {
                key: key.into(),
                direction,
            }),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// Search text normalized for matching. Whitespace-only input counts
    /// as no search at all.
    pub(crate) fn search_term(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Filters that actually constrain the view; `"all"` entries drop out.
    pub(crate) fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, value)| value.as_str() != FILTER_ALL)
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_means_no_search() {
        assert_eq!(QueryDescriptor::default().search_term(), None);

        let descriptor = QueryDescriptor::default().with_search("   ");
        assert_eq!(descriptor.search_term(), None);
    }

    #[test]
    fn search_term_is_trimmed_and_lowercased() {
        let descriptor = QueryDescriptor::default().with_search("  Chase  ");
        assert_eq!(descriptor.search_term().as_deref(), Some("chase"));
    }

    #[test]
    fn all_sentinel_deactivates_a_filter() {
        let descriptor = QueryDescriptor::default()
            .with_filter("status", FILTER_ALL)
            .with_filter("account_kind", "mortgage");

        let active: Vec<_> = descriptor.active_filters().collect();
        assert_eq!(active, vec![("account_kind", "mortgage")]);
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let descriptor = QueryDescriptor::sorted_by("payment_date", SortDirection::Descending)
            .with_search("chase")
            .with_filter("status", "late");

        let encoded = serde_json::to_string(&descriptor).expect("descriptor serializes");
        let decoded: QueryDescriptor = serde_json::from_str(&encoded).expect("descriptor parses");
        assert_eq!(decoded, descriptor);
    }
}
