//! Business logic layer orchestrating repositories.
//!
//! Services wrap the repository layer with domain semantics: converting
//! absent lookups into typed errors, validating payloads before persistence,
//! and computing pagination metadata. Controllers call services; services
//! call repositories.

pub mod auth;
pub mod car;
