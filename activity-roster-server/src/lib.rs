//! Axum server for the [`activity_roster_api`] rest api.
//!
//! The roster lives in memory only, a restart resets it to [`store::ActivityStore::seeded`].

pub mod error;
pub mod roster;
pub mod routes;
pub mod store;
