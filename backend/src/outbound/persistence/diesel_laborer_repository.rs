//! PostgreSQL-backed `LaborerRepository` implementation using Diesel ORM.
//!
//! Every operation is a single statement. Email uniqueness comes from the
//! `laborers_email_key` constraint; concurrent registrations of one email
//! cannot both succeed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LaborerPersistenceError, LaborerRepository};
use crate::domain::{
    Email, Laborer, LaborerCredential, LaborerFilter, LaborerId, NewLaborer, PasswordHash,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CredentialRow, LaborerRow, NewLaborerRow};
use super::pool::DbPool;
use super::schema::laborers;

/// Diesel-backed implementation of the `LaborerRepository` port.
#[derive(Clone)]
pub struct DieselLaborerRepository {
    pool: DbPool,
}

impl DieselLaborerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_laborer(row: LaborerRow) -> Result<Laborer, LaborerPersistenceError> {
    let email = Email::new(&row.email)
        .map_err(|err| LaborerPersistenceError::query(format!("laborer {}: {err}", row.id)))?;
    Ok(Laborer::new(
        LaborerId::new(row.id),
        email,
        row.name,
        row.mobile,
    ))
}

fn row_to_credential(row: CredentialRow) -> Result<LaborerCredential, LaborerPersistenceError> {
    let password_hash = PasswordHash::new(row.password_hash)
        .map_err(|err| LaborerPersistenceError::query(format!("laborer {}: {err}", row.id)))?;
    Ok(LaborerCredential {
        id: LaborerId::new(row.id),
        password_hash,
    })
}

#[async_trait]
impl LaborerRepository for DieselLaborerRepository {
    async fn insert(&self, laborer: &NewLaborer) -> Result<LaborerId, LaborerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewLaborerRow {
            email: laborer.email.as_ref(),
            password_hash: laborer.password_hash.as_ref(),
            mobile: laborer.mobile.as_deref(),
        };

        let id: i64 = diesel::insert_into(laborers::table)
            .values(&row)
            .returning(laborers::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(LaborerId::new(id))
    }

    async fn find_credential(
        &self,
        email: &Email,
    ) -> Result<Option<LaborerCredential>, LaborerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = laborers::table
            .filter(laborers::email.eq(email.as_ref()))
            .select(CredentialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_credential).transpose()
    }

    async fn find_matching(
        &self,
        filter: &LaborerFilter,
    ) -> Result<Vec<Laborer>, LaborerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = laborers::table
            .select(LaborerRow::as_select())
            .into_boxed();
        let query = match filter {
            LaborerFilter::ById(id) => query.filter(laborers::id.eq(id.get())),
            LaborerFilter::ByName(name) => query.filter(laborers::name.eq(name.as_str())),
            LaborerFilter::ByEmail(email) => query.filter(laborers::email.eq(email.as_ref())),
        };

        let rows: Vec<LaborerRow> = query
            .order(laborers::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_laborer).collect()
    }
}
