use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::credit::domain::PersonId;
use crate::credit::seed;
use crate::credit::service::ProfileService;
use crate::credit::store::{Roster, RosterStore, StoreError};

pub(super) fn seeded_roster() -> Roster {
    Roster::new(seed::people())
}

pub(super) fn person_id(raw: &str) -> PersonId {
    PersonId(raw.to_string())
}

pub(super) fn edit_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 20).expect("valid date")
}

#[derive(Clone)]
pub(super) struct MemoryRoster {
    roster: Arc<Mutex<Roster>>,
}

impl MemoryRoster {
    pub(super) fn seeded() -> Self {
        Self {
            roster: Arc::new(Mutex::new(seeded_roster())),
        }
    }
}

impl RosterStore for MemoryRoster {
    fn snapshot(&self) -> Result<Roster, StoreError> {
        Ok(self.roster.lock().expect("roster mutex poisoned").clone())
    }

    fn replace(&self, roster: Roster) -> Result<(), StoreError> {
        *self.roster.lock().expect("roster mutex poisoned") = roster;
        Ok(())
    }
}

pub(super) struct UnavailableRoster;

impl RosterStore for UnavailableRoster {
    fn snapshot(&self) -> Result<Roster, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn replace(&self, _roster: Roster) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (ProfileService<MemoryRoster>, Arc<MemoryRoster>) {
    let store = Arc::new(MemoryRoster::seeded());
    let service = ProfileService::new(store.clone());
    (service, store)
}

pub(super) fn profile_router_with_seed() -> axum::Router {
    let (service, _) = build_service();
    crate::credit::profile_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
