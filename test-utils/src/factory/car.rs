//! Car factory for creating test car entities.
//!
//! This module provides factory methods for creating car entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// Provides a builder pattern for creating car entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db)
///     .name("Fiat")
///     .color("Red")
///     .power(135)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: String,
    power: i32,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Car {id}"` where id is auto-incremented
    /// - color: `"Gray"`
    /// - power: `100`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CarFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Car {}", id),
            color: "Gray".to_string(),
            power: 100,
        }
    }

    /// Sets the name for the car.
    ///
    /// # Arguments
    /// - `name` - Display name for the car
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the color for the car.
    ///
    /// # Arguments
    /// - `color` - Color label for the car
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the power for the car.
    ///
    /// # Arguments
    /// - `power` - Engine power value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity with database-assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            power: ActiveValue::Set(self.power),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::car::Model)` - Created car entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let car = create_car(&db).await?;
/// ```
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
