use chrono::NaiveDate;

use super::domain::{Person, PersonId, ScorePoint, SCORE_CEILING, SCORE_FLOOR};

/// Immutable snapshot of the people roster. Edits derive a new snapshot;
/// nothing hands out mutable access to a snapshot already shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|person| &person.id == id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Derives a new roster with the person's score replaced, the history
    /// extended, and `last_updated` stamped. Editing twice on the same day
    /// rewrites that day's history point instead of appending a duplicate.
    pub fn with_score(
        &self,
        person_id: &PersonId,
        score: u16,
        today: NaiveDate,
    ) -> Result<Roster, StoreError> {
        if !(SCORE_FLOOR..=SCORE_CEILING).contains(&score) {
            return Err(StoreError::ScoreOutOfRange(score));
        }

        let mut people = self.people.clone();
        let person = people
            .iter_mut()
            .find(|person| &person.id == person_id)
            .ok_or_else(|| StoreError::UnknownPerson(person_id.clone()))?;

        person.credit_score = score;
        person.last_updated = today;
        match person.credit_history.last_mut() {
            Some(point) if point.date == today => point.score = score,
            _ => person.credit_history.push(ScorePoint { date: today, score }),
        }

        Ok(Roster { people })
    }
}

/// Owns the current roster snapshot for a running app. Implementations
/// swap whole snapshots in and out.
pub trait RosterStore: Send + Sync {
    fn snapshot(&self) -> Result<Roster, StoreError>;
    fn replace(&self, roster: Roster) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("person `{0}` not found")]
    UnknownPerson(PersonId),
    #[error("credit score {0} is outside the {SCORE_FLOOR}..={SCORE_CEILING} range")]
    ScoreOutOfRange(u16),
    #[error("roster store unavailable: {0}")]
    Unavailable(String),
}
