use chrono::NaiveDate;
use std::cmp::Ordering;

/// A field value read out of a record for searching, filtering, or sorting.
///
/// The kind fixes the comparison semantics: text and categories order
/// lexicographically (case-insensitive for text), numbers numerically, and
/// dates chronologically.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Category(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: impl Into<f64>) -> Self {
        Self::Number(value.into())
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self::Category(value.into())
    }

    /// Case-insensitive substring test backing the search predicate. Only
    /// string-like values participate; numbers and dates never match.
    pub(crate) fn contains(&self, needle_lower: &str) -> bool {
        match self {
            Self::Text(value) | Self::Category(value) => {
                value.to_lowercase().contains(needle_lower)
            }
            Self::Number(_) | Self::Date(_) => false,
        }
    }

    /// Exact equality against a filter value. Filters are case sensitive.
    pub(crate) fn accepts(&self, filter_value: &str) -> bool {
        match self {
            Self::Text(value) | Self::Category(value) => value == filter_value,
            Self::Number(_) | Self::Date(_) => false,
        }
    }

    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Category(a), Self::Category(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            // A schema reads each field with one kind, so mixed pairs only
            // appear through caller error; treat them as ties.
            _ => Ordering::Equal,
        }
    }
}

/// Declares one queryable field: a name, an accessor, and the query roles
/// the field may play. Roles are opt-in so a schema can expose a field for
/// sorting without also making it searchable.
pub struct FieldSpec<R> {
    name: &'static str,
    read: fn(&R) -> FieldValue,
    searchable: bool,
    filterable: bool,
    sortable: bool,
}

impl<R> FieldSpec<R> {
    pub fn new(name: &'static str, read: fn(&R) -> FieldValue) -> Self {
        Self {
            name,
            read,
            searchable: false,
            filterable: false,
            sortable: false,
        }
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self, record: &R) -> FieldValue {
        (self.read)(record)
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }
}

/// Ordered field table for one record type.
pub struct Schema<R> {
    fields: Vec<FieldSpec<R>>,
}

impl<R> Schema<R> {
    pub fn new(fields: Vec<FieldSpec<R>>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec<R>> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub(crate) fn searchable_fields(&self) -> impl Iterator<Item = &FieldSpec<R>> {
        self.fields.iter().filter(|field| field.searchable)
    }
}
