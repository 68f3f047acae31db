//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test business logic without database overhead
//! - **Serialization tests**: Test DTO conversion without persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let car = fixture::car::entity();
//! ```

pub mod car;

pub use car::entity as car_entity;
