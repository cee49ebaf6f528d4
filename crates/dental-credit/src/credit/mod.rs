//! Credit dashboard domain: tracked profiles, payment history, card
//! activity, financing offers, and the views the dashboard renders.
//!
//! The record collections are plain data. Each browsing view pairs a
//! collection with a field schema and leans on [`crate::query`] for its
//! search, filter, and sort behavior; the profile service owns the roster
//! snapshot and publishes a fresh one on every score edit.

pub mod advice;
pub mod cards;
pub mod domain;
pub mod offers;
pub mod payments;
pub mod people;
pub mod router;
pub mod seed;
pub mod service;
pub mod statement;
pub mod store;

#[cfg(test)]
mod tests;

pub use advice::{Impact, ImprovementTip, TipCategory};
pub use cards::{
    CardActivityView, CardOverview, CardRow, CardTransaction, CardsQuery, CategorySpend,
    SpendCategory, TransactionKind,
};
pub use domain::{
    Address, Demographics, Employment, HistoryStats, Person, PersonId, RiskLevel, ScorePoint,
    ScoreTier, Trend, SCORE_CEILING, SCORE_FLOOR,
};
pub use offers::{DentalProcedure, LoanOffer, QualificationView, Urgency};
pub use payments::{
    AccountKind, PaymentHistoryView, PaymentOverview, PaymentRecord, PaymentRow, PaymentStatus,
    PaymentsQuery,
};
pub use people::{PeopleOverview, PeopleQuery, PeopleSortKey, PeopleView, PersonCard};
pub use router::{profile_router, ScoreUpdateRequest};
pub use service::{
    HistoryView, ProfileService, ProfileServiceError, RosterEntry, ScoreCard, ScoreChange,
};
pub use statement::{StatementImportError, StatementImporter};
pub use store::{Roster, RosterStore, StoreError};
