//! Schema-driven queries over in-memory record collections.
//!
//! Every list view in the dashboard reduces to the same three operations:
//! derive a filtered + sorted view of a collection, aggregate the view, and
//! classify a score against a threshold table. Each record type declares a
//! [`Schema`] of [`FieldSpec`]s naming its queryable fields; the engine owns
//! the predicate and ordering logic once, instead of each view carrying its
//! own copy.

mod descriptor;
mod engine;
mod field;
mod summary;
mod tiers;

pub use descriptor::{QueryDescriptor, SortDirection, SortSpec, FILTER_ALL};
pub use engine::{filter_and_sort, QueryError};
pub use field::{FieldSpec, FieldValue, Schema};
pub use summary::{
    percent_of, summarize, AggregateSummary, AggregationSpec, BreakdownSpec, BreakdownWeight,
    CategoryWeight,
};
pub use tiers::TierTable;
