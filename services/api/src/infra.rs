use chrono::NaiveDate;
use dental_credit::credit::{seed, Roster, RosterStore, StoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Roster store backing the running service. Snapshots swap in and out
/// under a mutex; readers always see a complete roster.
#[derive(Clone)]
pub(crate) struct InMemoryRosterStore {
    roster: Arc<Mutex<Roster>>,
}

impl InMemoryRosterStore {
    pub(crate) fn seeded() -> Self {
        Self {
            roster: Arc::new(Mutex::new(Roster::new(seed::people()))),
        }
    }
}

impl RosterStore for InMemoryRosterStore {
    fn snapshot(&self) -> Result<Roster, StoreError> {
        Ok(self.roster.lock().expect("roster mutex poisoned").clone())
    }

    fn replace(&self, roster: Roster) -> Result<(), StoreError> {
        *self.roster.lock().expect("roster mutex poisoned") = roster;
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
