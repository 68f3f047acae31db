use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted car as returned by the API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct CarDto {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub color: String,
    pub power: i32,
}

/// Request payload for creating a car.
///
/// All fields are optional at the deserialization layer so that missing or
/// null values surface as structured validation errors rather than body
/// rejection; the service validates presence before anything is persisted.
/// There is no `id` field: identifiers are always assigned by the database.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CarPostDto {
    pub name: Option<String>,
    pub color: Option<String>,
    pub power: Option<i32>,
}

/// Request payload for fully replacing a car.
///
/// Must carry the id of the target row; the other fields overwrite the
/// stored values wholesale.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CarPutDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub power: Option<i32>,
}

/// One page of cars together with pagination metadata.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedCarsDto {
    pub cars: Vec<CarDto>,
    /// Total number of cars across all pages.
    pub total: u64,
    /// Zero-based page index of this page.
    pub page: u64,
    /// Requested page size.
    pub size: u64,
    /// Total number of pages at the requested size.
    pub total_pages: u64,
}
