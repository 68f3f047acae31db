use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::car::{CarSort, CreateCarParams, SortDirection, UpdateCarParams};

/// Repository providing database operations for car records.
///
/// Holds a reference to the database connection and performs all reads and
/// writes against the `car` table.
pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of cars together with the total row count.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    /// - `sort` - Typed sort column and direction
    ///
    /// # Returns
    /// - `Ok((cars, total))` - Page contents in sorted order plus total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_paginated(
        &self,
        page: u64,
        per_page: u64,
        sort: CarSort,
    ) -> Result<(Vec<entity::car::Model>, u64), DbErr> {
        let query = match sort.direction {
            SortDirection::Asc => entity::prelude::Car::find().order_by_asc(sort.field.column()),
            SortDirection::Desc => entity::prelude::Car::find().order_by_desc(sort.field.column()),
        };

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let cars = paginator.fetch_page(page).await?;

        Ok((cars, total))
    }

    /// Finds a car by its id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::car::Model>, DbErr> {
        entity::prelude::Car::find_by_id(id).one(self.db).await
    }

    /// Finds cars whose name contains the given fragment.
    ///
    /// Matching is a `LIKE '%fragment%'` substring search; results are
    /// ordered by id.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Name.contains(name))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds cars with exactly the given color.
    pub async fn find_by_color(&self, color: &str) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Color.eq(color))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds cars with exactly the given power.
    pub async fn find_by_power(&self, power: i32) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Power.eq(power))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    /// Creates a new car; the id is assigned by the database.
    pub async fn create(&self, params: CreateCarParams) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            power: ActiveValue::Set(params.power),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Fully replaces a car's fields, preserving its id.
    ///
    /// Fetch, overlay, and update run inside a single transaction so a
    /// failure at any step leaves the row untouched.
    ///
    /// # Returns
    /// - `Ok(Model)` - The replaced row as persisted
    /// - `Err(DbErr::RecordNotFound)` - No row exists for `params.id`
    /// - `Err(DbErr)` - Database error during the transaction
    pub async fn update(&self, params: UpdateCarParams) -> Result<entity::car::Model, DbErr> {
        let txn = self.db.begin().await?;

        let car = entity::prelude::Car::find_by_id(params.id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Car with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::car::ActiveModel = car.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.color = ActiveValue::Set(params.color);
        active_model.power = ActiveValue::Set(params.power);

        let updated = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a car by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the id did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
