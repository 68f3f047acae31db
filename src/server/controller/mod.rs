//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert DTOs to
//! operation parameters, call the service layer, and convert domain models
//! back to DTOs for the response.

pub mod car;
