use sea_orm::DatabaseConnection;

use crate::{
    model::car::{CarPostDto, CarPutDto},
    server::{
        data::car::CarRepository,
        error::AppError,
        model::car::{Car, CarSort, CreateCarParams, PaginatedCars, UpdateCarParams},
    },
};

/// Message used whenever a car id matches no row.
const CAR_NOT_FOUND: &str = "Car not found";

/// Service providing business logic for car management.
pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of cars with pagination metadata.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size (the controller applies the default of 5)
    /// - `sort` - Typed sort specification
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        sort: CarSort,
    ) -> Result<PaginatedCars, AppError> {
        let repo = CarRepository::new(self.db);

        let (cars, total) = repo.list_paginated(page, per_page, sort).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedCars {
            cars: cars.into_iter().map(Car::from_entity).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets a car by id, raising a descriptive error when it is absent.
    ///
    /// # Returns
    /// - `Ok(Car)` - The car with the given id
    /// - `Err(AppError::NotFound)` - No car exists for the id
    pub async fn get_by_id(&self, id: i64) -> Result<Car, AppError> {
        let repo = CarRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .map(Car::from_entity)
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))
    }

    /// Gets all cars whose name contains the given fragment.
    ///
    /// An empty result is a normal outcome, not an error.
    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Car>, AppError> {
        let repo = CarRepository::new(self.db);

        let cars = repo.find_by_name(name).await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    /// Gets all cars with exactly the given color.
    pub async fn get_by_color(&self, color: &str) -> Result<Vec<Car>, AppError> {
        let repo = CarRepository::new(self.db);

        let cars = repo.find_by_color(color).await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    /// Gets all cars with exactly the given power.
    pub async fn get_by_power(&self, power: i32) -> Result<Vec<Car>, AppError> {
        let repo = CarRepository::new(self.db);

        let cars = repo.find_by_power(power).await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    /// Validates a POST payload and creates the car.
    ///
    /// Validation runs entirely before the insert, so a failed payload never
    /// touches the database and no partial row can remain. The id is assigned
    /// by the database; anything the client might have sent is not even
    /// representable in the payload type.
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car with its assigned id
    /// - `Err(AppError::ValidationErr)` - One or more fields are invalid
    pub async fn create(&self, dto: CarPostDto) -> Result<Car, AppError> {
        let params = CreateCarParams::from_dto(dto)?;

        let repo = CarRepository::new(self.db);
        let car = repo.create(params).await?;

        Ok(Car::from_entity(car))
    }

    /// Validates a PUT payload and fully replaces the target car.
    ///
    /// The target id must already exist — an absent id is a not-found
    /// condition, never an implicit create. The replacement itself runs in a
    /// transaction inside the repository.
    ///
    /// # Returns
    /// - `Ok(Car)` - The replaced car, id preserved
    /// - `Err(AppError::ValidationErr)` - One or more fields are invalid
    /// - `Err(AppError::NotFound)` - No car exists for the id
    pub async fn replace(&self, dto: CarPutDto) -> Result<Car, AppError> {
        let params = UpdateCarParams::from_dto(dto)?;

        let repo = CarRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(CAR_NOT_FOUND.to_string()));
        }

        let car = repo.update(params).await?;

        Ok(Car::from_entity(car))
    }

    /// Deletes a car by id.
    ///
    /// # Returns
    /// - `Ok(())` - The row was deleted
    /// - `Err(AppError::NotFound)` - No car exists for the id
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = CarRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(CAR_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
