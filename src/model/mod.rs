//! API data-transfer objects shared across the HTTP boundary.
//!
//! These types define the wire format of the REST API: request payloads,
//! response bodies, and the structured error shapes. They are distinct from
//! the persisted entities and from the server-side domain models.

pub mod api;
pub mod car;
