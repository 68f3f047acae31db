use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDetailsDto, ValidationErrorDetailsDto},
        car::{CarDto, CarPostDto, CarPutDto, PaginatedCarsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::car::{Car, CarSort},
        service::car::CarService,
        state::AppState,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CARS_TAG: &str = "cars";

/// Query parameters controlling listing pagination and ordering.
#[derive(Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    /// Page size; 5 when the caller specifies none.
    #[serde(default = "default_size")]
    pub size: u64,
    /// Sort specification as `field` or `field,asc|desc`.
    pub sort: Option<String>,
}

fn default_size() -> u64 {
    5
}

#[derive(Deserialize, IntoParams)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Deserialize, IntoParams)]
pub struct ColorQuery {
    pub color: String,
}

#[derive(Deserialize, IntoParams)]
pub struct PowerQuery {
    pub power: i32,
}

/// List cars with pagination and sorting.
///
/// Returns one page of cars. Page size defaults to 5 when not given; the
/// sort parameter accepts `field` or `field,asc|desc` over the columns
/// id/name/color/power.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the Basic credentials
/// - `params` - Pagination parameters (page, size, sort)
///
/// # Returns
/// - `200 OK` - One page of cars with pagination metadata
/// - `400 Bad Request` - Unknown sort field or direction
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars",
    tag = CARS_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid sort parameter", body = ErrorDetailsDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).require(&[]).await?;

    let sort = CarSort::parse(params.sort.as_deref())?;

    let service = CarService::new(&state.db);

    let page = service.get_paginated(params.page, params.size, sort).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a single car by id.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the Basic credentials
/// - `id` - Car id to fetch
///
/// # Returns
/// - `200 OK` - The car with the given id
/// - `400 Bad Request` - No car exists for the id ("Car not found")
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = CARS_TAG,
    params(
        ("id" = i64, Path, description = "Car id")
    ),
    responses(
        (status = 200, description = "The requested car", body = CarDto),
        (status = 400, description = "Car not found", body = ErrorDetailsDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).require(&[]).await?;

    let service = CarService::new(&state.db);

    let car = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Find cars by name fragment.
///
/// Returns every car whose name contains the given fragment; an empty list
/// is a normal result.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching cars (possibly empty)
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/name",
    tag = CARS_TAG,
    params(NameQuery),
    responses(
        (status = 200, description = "Cars matching the name fragment", body = Vec<CarDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn find_cars_by_name(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).require(&[]).await?;

    let service = CarService::new(&state.db);

    let cars = service.get_by_name(&query.name).await?;

    Ok((
        StatusCode::OK,
        Json(cars.into_iter().map(Car::into_dto).collect::<Vec<_>>()),
    ))
}

/// Find cars by exact color.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching cars (possibly empty)
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/color",
    tag = CARS_TAG,
    params(ColorQuery),
    responses(
        (status = 200, description = "Cars with the given color", body = Vec<CarDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn find_cars_by_color(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ColorQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).require(&[]).await?;

    let service = CarService::new(&state.db);

    let cars = service.get_by_color(&query.color).await?;

    Ok((
        StatusCode::OK,
        Json(cars.into_iter().map(Car::into_dto).collect::<Vec<_>>()),
    ))
}

/// Find cars by exact power.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching cars (possibly empty)
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/power",
    tag = CARS_TAG,
    params(PowerQuery),
    responses(
        (status = 200, description = "Cars with the given power", body = Vec<CarDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn find_cars_by_power(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PowerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).require(&[]).await?;

    let service = CarService::new(&state.db);

    let cars = service.get_by_power(query.power).await?;

    Ok((
        StatusCode::OK,
        Json(cars.into_iter().map(Car::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a new car.
///
/// Validates the payload (non-empty name and color, non-null power) before
/// anything is persisted; every offending field is reported. The id is
/// assigned by the database.
///
/// # Access Control
/// - `Admin` - Only admins can create cars
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the Basic credentials
/// - `payload` - Car creation data (name, color, power)
///
/// # Returns
/// - `201 Created` - Successfully created car with its assigned id
/// - `400 Bad Request` - Invalid payload, all offending fields listed
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `403 Forbidden` - Authenticated but not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/cars",
    tag = CARS_TAG,
    request_body = CarPostDto,
    responses(
        (status = 201, description = "Successfully created car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ValidationErrorDetailsDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 403, description = "User is not an admin", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CarPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CarService::new(&state.db);

    let car = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Fully replace an existing car.
///
/// The body must carry the id of the target row; the other fields overwrite
/// the stored values while the id is preserved. Replacing an id that does
/// not exist is a not-found condition, never an implicit create.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the Basic credentials
/// - `payload` - Replacement data including the target id
///
/// # Returns
/// - `200 OK` - Successfully replaced car
/// - `400 Bad Request` - Invalid payload or no car exists for the id
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/cars",
    tag = CARS_TAG,
    request_body = CarPutDto,
    responses(
        (status = 200, description = "Successfully replaced car", body = CarDto),
        (status = 400, description = "Invalid car data or car not found", body = ValidationErrorDetailsDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn replace_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CarPutDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).require(&[]).await?;

    let service = CarService::new(&state.db);

    let car = service.replace(payload).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Delete a car by id.
///
/// # Access Control
/// - `Admin` - Only admins can delete cars
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the Basic credentials
/// - `id` - Car id to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted car
/// - `400 Bad Request` - No car exists for the id ("Car not found")
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `403 Forbidden` - Authenticated but not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = CARS_TAG,
    params(
        ("id" = i64, Path, description = "Car id")
    ),
    responses(
        (status = 204, description = "Successfully deleted car"),
        (status = 400, description = "Car not found", body = ErrorDetailsDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDetailsDto),
        (status = 403, description = "User is not an admin", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CarService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
