use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    gauge_percent, latest_delta, HistoryStats, Person, PersonId, ScorePoint, ScoreTier, Trend,
};
use super::people::{self, PeopleQuery, PeopleView};
use super::store::{RosterStore, StoreError};
use crate::query::QueryError;

/// Entry in the person selector strip.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub id: PersonId,
    pub name: String,
    pub credit_score: u16,
    pub tier: ScoreTier,
    pub tier_label: &'static str,
}

impl RosterEntry {
    fn for_person(person: &Person) -> Self {
        let tier = person.tier();
        Self {
            id: person.id.clone(),
            name: person.full_name(),
            credit_score: person.credit_score,
            tier,
            tier_label: tier.label(),
        }
    }
}

/// Score card panel for one person.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub person_id: PersonId,
    pub name: String,
    pub credit_score: u16,
    pub tier: ScoreTier,
    pub tier_label: &'static str,
    pub gauge_percent: f64,
    pub delta: i32,
    pub trend: Trend,
    pub trend_label: &'static str,
    pub last_updated: NaiveDate,
}

impl ScoreCard {
    pub fn for_person(person: &Person) -> Self {
        let tier = person.tier();
        let trend = person.trend();
        Self {
            person_id: person.id.clone(),
            name: person.full_name(),
            credit_score: person.credit_score,
            tier,
            tier_label: tier.label(),
            gauge_percent: gauge_percent(person.credit_score),
            delta: latest_delta(&person.credit_history),
            trend,
            trend_label: trend.label(),
            last_updated: person.last_updated,
        }
    }
}

/// Score history panel: points newest first plus the high/low stats.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub person_id: PersonId,
    pub entries: Vec<ScorePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<HistoryStats>,
}

/// Outcome of a score edit.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreChange {
    pub person_id: PersonId,
    pub previous_score: u16,
    pub new_score: u16,
    pub delta: i32,
    pub tier: ScoreTier,
    pub tier_label: &'static str,
}

/// Service wrapping the roster store with profile reads and score edits.
/// Every edit loads the current snapshot, derives the next one, and swaps
/// it in whole.
pub struct ProfileService<S> {
    store: Arc<S>,
}

impl<S> ProfileService<S>
where
    S: RosterStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Selector entries, in roster order.
    pub fn roster(&self) -> Result<Vec<RosterEntry>, ProfileServiceError> {
        let roster = self.store.snapshot()?;
        Ok(roster.people().iter().map(RosterEntry::for_person).collect())
    }

    pub fn profile(&self, id: &PersonId) -> Result<Person, ProfileServiceError> {
        let roster = self.store.snapshot()?;
        roster
            .person(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownPerson(id.clone()).into())
    }

    /// The people browser over the current snapshot.
    pub fn browse(&self, query: &PeopleQuery) -> Result<PeopleView, ProfileServiceError> {
        let roster = self.store.snapshot()?;
        Ok(people::browse(roster.people(), query)?)
    }

    pub fn score_card(&self, id: &PersonId) -> Result<ScoreCard, ProfileServiceError> {
        let person = self.profile(id)?;
        Ok(ScoreCard::for_person(&person))
    }

    pub fn history(&self, id: &PersonId) -> Result<HistoryView, ProfileServiceError> {
        let person = self.profile(id)?;
        let mut entries = person.credit_history.clone();
        entries.reverse();
        Ok(HistoryView {
            person_id: person.id.clone(),
            stats: HistoryStats::from_history(&person.credit_history),
            entries,
        })
    }

    /// Applies a score edit by deriving and publishing a new snapshot.
    pub fn update_score(
        &self,
        id: &PersonId,
        score: u16,
        today: NaiveDate,
    ) -> Result<ScoreChange, ProfileServiceError> {
        let roster = self.store.snapshot()?;
        let previous = roster
            .person(id)
            .map(|person| person.credit_score)
            .ok_or_else(|| StoreError::UnknownPerson(id.clone()))?;

        let updated = roster.with_score(id, score, today)?;
        self.store.replace(updated)?;

        let tier = ScoreTier::for_score(score);
        Ok(ScoreChange {
            person_id: id.clone(),
            previous_score: previous,
            new_score: score,
            delta: i32::from(score) - i32::from(previous),
            tier,
            tier_label: tier.label(),
        })
    }
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Query(#[from] QueryError),
}
