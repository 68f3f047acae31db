//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally; conversion
//! to domain models happens in the service layer. All database queries, inserts, updates,
//! and deletes are performed through these repositories.

pub mod car;
pub mod user;

#[cfg(test)]
mod test;
