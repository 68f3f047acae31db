//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for seeding multiple
//! entities at once.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Seeds the three well-known showroom cars.
///
/// Inserts `Volkswagen/White/220`, `Fiat/Red/135`, and `Renault/Blue/200`
/// in that order and returns them as persisted. Useful for pagination and
/// field-lookup tests that need a small, predictable data set.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Vec<entity::car::Model>)` - The three created cars in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn seed_showroom(db: &DatabaseConnection) -> Result<Vec<entity::car::Model>, DbErr> {
    let mut cars = Vec::new();

    for (name, color, power) in [
        ("Volkswagen", "White", 220),
        ("Fiat", "Red", 135),
        ("Renault", "Blue", 200),
    ] {
        let car = crate::factory::car::CarFactory::new(db)
            .name(name)
            .color(color)
            .power(power)
            .build()
            .await?;
        cars.push(car);
    }

    Ok(cars)
}
