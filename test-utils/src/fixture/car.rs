//! Car fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating car entity models without database
//! insertion. These are useful for unit testing conversions and defaults.

use entity::car;

/// Default test car name.
pub const DEFAULT_NAME: &str = "Volkswagen";

/// Default test car color.
pub const DEFAULT_COLOR: &str = "White";

/// Default test car power.
pub const DEFAULT_POWER: i32 = 220;

/// Creates a car entity model with default values.
///
/// This function creates an in-memory car entity without inserting into the
/// database. Use this for unit tests of conversions and mapping logic.
///
/// # Default Values
/// - id: `1`
/// - name: `"Volkswagen"`
/// - color: `"White"`
/// - power: `220`
///
/// # Returns
/// - `car::Model` - In-memory car entity
pub fn entity() -> car::Model {
    car::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        color: DEFAULT_COLOR.to_string(),
        power: DEFAULT_POWER,
    }
}

/// Creates a car entity model with the given field values.
///
/// # Arguments
/// - `id` - Primary key to use
/// - `name` - Car name
/// - `color` - Car color
/// - `power` - Car power
///
/// # Returns
/// - `car::Model` - In-memory car entity with the provided values
pub fn entity_with(id: i64, name: &str, color: &str, power: i32) -> car::Model {
    car::Model {
        id,
        name: name.to_string(),
        color: color.to_string(),
        power,
    }
}
