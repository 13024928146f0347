//! Test utilities for the service crate.
//!
//! Shared by unit tests and by integration tests under `tests/`, which enable
//! the `test-support` feature. Nothing here touches the network or a real
//! store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;

use crate::domain::ports::{LaborerPersistenceError, LaborerRepository};
use crate::domain::{
    Email, Laborer, LaborerCredential, LaborerFilter, LaborerId, NewLaborer, PasswordHash,
};

#[derive(Debug, Clone)]
struct StoredLaborer {
    laborer: Laborer,
    password_hash: PasswordHash,
}

#[derive(Debug, Default)]
struct RepositoryState {
    rows: Vec<StoredLaborer>,
    next_id: i64,
}

/// Laborer repository held in memory.
///
/// Mirrors the store's behaviour that matters to callers: identifiers are
/// assigned in increasing order, emails are unique, and lookups return rows
/// ordered by id.
///
/// # Examples
/// ```
/// use laborer_service::domain::ports::LaborerRepository;
/// use laborer_service::domain::{Email, LaborerFilter, NewLaborer, PasswordHash};
/// use laborer_service::test_support::InMemoryLaborerRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryLaborerRepository::new();
/// let email = Email::new("a@x.com").unwrap();
/// let id = repo
///     .insert(&NewLaborer {
///         email: email.clone(),
///         password_hash: PasswordHash::new("hash").unwrap(),
///         mobile: None,
///     })
///     .await
///     .unwrap();
/// let found = repo.find_matching(&LaborerFilter::ByEmail(email)).await.unwrap();
/// assert_eq!(found[0].id(), id);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLaborerRepository {
    state: Mutex<RepositoryState>,
}

impl InMemoryLaborerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, RepositoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a fully populated record, including a display name the HTTP
    /// surface never writes.
    pub fn seed(&self, laborer: Laborer, password_hash: PasswordHash) {
        let mut state = self.state();
        state.next_id = state.next_id.max(laborer.id().get());
        state.rows.push(StoredLaborer {
            laborer,
            password_hash,
        });
        state.rows.sort_by_key(|row| row.laborer.id());
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.state().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches(laborer: &Laborer, filter: &LaborerFilter) -> bool {
    match filter {
        LaborerFilter::ById(id) => laborer.id() == *id,
        LaborerFilter::ByName(name) => laborer.name() == Some(name.as_str()),
        LaborerFilter::ByEmail(email) => laborer.email() == email,
    }
}

#[async_trait]
impl LaborerRepository for InMemoryLaborerRepository {
    async fn insert(&self, laborer: &NewLaborer) -> Result<LaborerId, LaborerPersistenceError> {
        let mut state = self.state();
        if state
            .rows
            .iter()
            .any(|row| row.laborer.email() == &laborer.email)
        {
            return Err(LaborerPersistenceError::duplicate_email());
        }
        state.next_id += 1;
        let id = LaborerId::new(state.next_id);
        state.rows.push(StoredLaborer {
            laborer: Laborer::new(id, laborer.email.clone(), None, laborer.mobile.clone()),
            password_hash: laborer.password_hash.clone(),
        });
        Ok(id)
    }

    async fn find_credential(
        &self,
        email: &Email,
    ) -> Result<Option<LaborerCredential>, LaborerPersistenceError> {
        Ok(self
            .state()
            .rows
            .iter()
            .find(|row| row.laborer.email() == email)
            .map(|row| LaborerCredential {
                id: row.laborer.id(),
                password_hash: row.password_hash.clone(),
            }))
    }

    async fn find_matching(
        &self,
        filter: &LaborerFilter,
    ) -> Result<Vec<Laborer>, LaborerPersistenceError> {
        Ok(self
            .state()
            .rows
            .iter()
            .filter(|row| matches(&row.laborer, filter))
            .map(|row| row.laborer.clone())
            .collect())
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug)]
pub struct FixtureClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixtureClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn new_laborer(email: &str) -> NewLaborer {
        NewLaborer {
            email: Email::new(email).expect("email"),
            password_hash: PasswordHash::new("hash").expect("hash"),
            mobile: None,
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let repo = InMemoryLaborerRepository::new();
        repo.insert(&new_laborer("a@x.com")).await.expect("first");

        let err = repo
            .insert(&new_laborer("a@x.com"))
            .await
            .expect_err("duplicate");

        assert_eq!(err, LaborerPersistenceError::DuplicateEmail);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn name_lookup_returns_all_matches_in_id_order() {
        let repo = InMemoryLaborerRepository::new();
        let hash = PasswordHash::new("hash").expect("hash");
        for (id, email) in [(3, "c@x.com"), (1, "a@x.com"), (2, "b@x.com")] {
            let laborer = Laborer::new(
                LaborerId::new(id),
                Email::new(email).expect("email"),
                Some(if id == 2 { "Bea" } else { "Ada" }.to_owned()),
                None,
            );
            repo.seed(laborer, hash.clone());
        }

        let found = repo
            .find_matching(&LaborerFilter::ByName("Ada".to_owned()))
            .await
            .expect("lookup");
        let ids: Vec<i64> = found.iter().map(|l| l.id().get()).collect();

        assert_eq!(ids, vec![1, 3]);
        let next = repo.insert(&new_laborer("d@x.com")).await.expect("insert");
        assert_eq!(next, LaborerId::new(4));
    }

    #[rstest]
    fn fixture_clock_advances() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp");
        let clock = FixtureClock::new(start);

        clock.advance(Duration::seconds(90));

        assert_eq!(clock.utc(), start + Duration::seconds(90));
    }
}
