use super::descriptor::{QueryDescriptor, SortDirection};
use super::field::Schema;

/// Caller contract violations surfaced by [`filter_and_sort`]. Unknown
/// filter fields are tolerated; an unknown or non-sortable sort key is not.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
    #[error("field `{0}` is not sortable")]
    UnsortableField(String),
}

/// Derives a view of `records`: search, then filters, then a stable sort.
///
/// The input slice is never touched; survivors are cloned in their original
/// relative order, and both sort directions keep that order for equal keys.
/// Running the same descriptor over its own output reproduces the view.
pub fn filter_and_sort<R: Clone>(
    records: &[R],
    descriptor: &QueryDescriptor,
    schema: &Schema<R>,
) -> Result<Vec<R>, QueryError> {
    let search = descriptor.search_term();

    let mut view: Vec<R> = records
        .iter()
        .filter(|record| matches_search(*record, search.as_deref(), schema))
        .filter(|record| matches_filters(*record, descriptor, schema))
        .cloned()
        .collect();

    if let Some(sort) = &descriptor.sort {
        let field = schema
            .field(&sort.key)
            .ok_or_else(|| QueryError::UnknownSortField(sort.key.clone()))?;
        if !field.is_sortable() {
            return Err(QueryError::UnsortableField(sort.key.clone()));
        }

        view.sort_by(|a, b| {
            let ordering = field.value(a).compare(&field.value(b));
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    Ok(view)
}

fn matches_search<R>(record: &R, term: Option<&str>, schema: &Schema<R>) -> bool {
    let Some(term) = term else {
        return true;
    };
    schema
        .searchable_fields()
        .any(|field| field.value(record).contains(term))
}

fn matches_filters<R>(record: &R, descriptor: &QueryDescriptor, schema: &Schema<R>) -> bool {
    descriptor
        .active_filters()
        .all(|(name, value)| match schema.field(name) {
            Some(field) if field.is_filterable() => field.value(record).accepts(value),
            // Unknown or non-filterable fields never veto a record.
            _ => true,
        })
}
