//! Data access and HTTP query layer for a basketball league database.
//!
//! `db` holds the parameterized queries over the SQLite schema, `routes`
//! exposes them as a JSON API.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
