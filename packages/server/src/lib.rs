// Polls Backend
//
// This crate provides a GraphQL CRUD backend for managing polls: questions
// (open-ended or multiple-choice), their choices, and user responses.
// Validation rules live in the polls domain; persistence is PostgreSQL via
// sqlx; the API is a juniper schema served over axum.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
