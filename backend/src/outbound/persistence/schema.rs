//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered laborers and their hashed credentials.
    laborers (id) {
        /// Store-assigned identifier (`BIGSERIAL`).
        id -> Int8,
        /// Login email, unique via `laborers_email_key`.
        email -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Text,
        mobile -> Nullable<Varchar>,
        /// Queryable but never written by the service.
        name -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}
