//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and `create_*` convenience functions for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let car = factory::car::create_car(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Seed the three well-known showroom cars
//!     let cars = factory::helpers::seed_showroom(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let car = factory::car::CarFactory::new(&db)
//!     .name("Fiat")
//!     .color("Red")
//!     .power(135)
//!     .build()
//!     .await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("boss")
//!     .authorities("ROLE_ADMIN,ROLE_USER")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `car` - Create car entities
//! - `user` - Create application user entities with bcrypt-hashed passwords
//! - `helpers` - Shared ID generation and multi-entity seeding

pub mod car;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use car::create_car;
pub use user::{create_admin, create_user};
