//! Internal Diesel row structs for the `laborers` table.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values.

use diesel::prelude::*;

use super::schema::laborers;

/// Public columns read by lookups.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = laborers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LaborerRow {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub mobile: Option<String>,
}

/// Columns read when authenticating.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = laborers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    pub id: i64,
    pub password_hash: String,
}

/// Insertable struct for registrations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = laborers)]
pub(crate) struct NewLaborerRow<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub mobile: Option<&'a str>,
}
