//! Car domain models and operation parameters.
//!
//! Provides the `Car` domain model, parameter types for create/replace
//! operations (which also own payload validation), the typed sort
//! specification parsed from the `sort` query parameter, and the paginated
//! result model.

use crate::model::car::{CarDto, CarPostDto, CarPutDto, PaginatedCarsDto};
use crate::server::error::validation::{FieldViolation, ValidationError};
use crate::server::error::AppError;

/// A car as the service layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub power: i32,
}

impl Car {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
            power: entity.power,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            name: self.name,
            color: self.color,
            power: self.power,
        }
    }
}

/// Validated parameters for creating a car.
///
/// Construction is only possible through `from_dto`, so holding a value of
/// this type means the payload already passed validation.
#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub name: String,
    pub color: String,
    pub power: i32,
}

impl CreateCarParams {
    /// Validates a POST payload and converts it to creation parameters.
    ///
    /// Every violation is collected before returning, so the resulting error
    /// lists all offending fields at once.
    ///
    /// # Returns
    /// - `Ok(CreateCarParams)` - Payload is complete and well-formed
    /// - `Err(ValidationError)` - One or more fields are missing or empty
    pub fn from_dto(dto: CarPostDto) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let name = non_empty(dto.name, "name", "The name cannot be empty", &mut violations);
        let color = non_empty(
            dto.color,
            "color",
            "The color cannot be empty",
            &mut violations,
        );

        if dto.power.is_none() {
            violations.push(FieldViolation {
                field: "power",
                message: "The power cannot be null",
            });
        }

        match (name, color, dto.power) {
            (Some(name), Some(color), Some(power)) if violations.is_empty() => Ok(Self {
                name,
                color,
                power,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}

/// Validated parameters for fully replacing a car.
#[derive(Debug, Clone)]
pub struct UpdateCarParams {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub power: i32,
}

impl UpdateCarParams {
    /// Validates a PUT payload and converts it to replacement parameters.
    ///
    /// The target id is required in the body; its absence is reported as a
    /// field violation alongside any other offending fields.
    ///
    /// # Returns
    /// - `Ok(UpdateCarParams)` - Payload is complete and well-formed
    /// - `Err(ValidationError)` - One or more fields are missing or empty
    pub fn from_dto(dto: CarPutDto) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        if dto.id.is_none() {
            violations.push(FieldViolation {
                field: "id",
                message: "The id cannot be null",
            });
        }

        let name = non_empty(dto.name, "name", "The name cannot be empty", &mut violations);
        let color = non_empty(
            dto.color,
            "color",
            "The color cannot be empty",
            &mut violations,
        );

        if dto.power.is_none() {
            violations.push(FieldViolation {
                field: "power",
                message: "The power cannot be null",
            });
        }

        match (dto.id, name, color, dto.power) {
            (Some(id), Some(name), Some(color), Some(power)) if violations.is_empty() => Ok(Self {
                id,
                name,
                color,
                power,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}

/// Records a violation when a string field is missing or blank.
fn non_empty(
    value: Option<String>,
    field: &'static str,
    message: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => {
            violations.push(FieldViolation { field, message });
            None
        }
    }
}

/// Column a car listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarSortField {
    Id,
    Name,
    Color,
    Power,
}

impl CarSortField {
    /// The entity column backing this sort field.
    pub fn column(self) -> entity::car::Column {
        match self {
            Self::Id => entity::car::Column::Id,
            Self::Name => entity::car::Column::Name,
            Self::Color => entity::car::Column::Color,
            Self::Power => entity::car::Column::Power,
        }
    }
}

/// Sort direction for a car listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Typed sort specification for car listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSort {
    pub field: CarSortField,
    pub direction: SortDirection,
}

impl CarSort {
    /// Parses the `sort` query parameter (`field` or `field,asc|desc`).
    ///
    /// Field names are matched against the whitelist `id`, `name`, `color`,
    /// `power`; direction defaults to ascending when omitted. Anything else
    /// is rejected as a bad request rather than reaching the database.
    ///
    /// # Returns
    /// - `Ok(CarSort)` - Parsed specification, or the `id,asc` default for `None`
    /// - `Err(AppError::BadRequest)` - Unknown field or direction
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = raw else {
            return Ok(Self {
                field: CarSortField::Id,
                direction: SortDirection::Asc,
            });
        };

        let mut parts = raw.splitn(2, ',');
        let field = match parts.next().unwrap_or("").trim() {
            "id" => CarSortField::Id,
            "name" => CarSortField::Name,
            "color" => CarSortField::Color,
            "power" => CarSortField::Power,
            other => {
                return Err(AppError::BadRequest(format!(
                    "Unknown sort field '{}'",
                    other
                )))
            }
        };

        let direction = match parts.next().map(str::trim) {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Unknown sort direction '{}'",
                    other
                )))
            }
        };

        Ok(Self { field, direction })
    }
}

/// One page of cars with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedCars {
    pub cars: Vec<Car>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCars {
    /// Converts the page to its DTO for API responses.
    pub fn into_dto(self) -> PaginatedCarsDto {
        PaginatedCarsDto {
            cars: self.cars.into_iter().map(Car::into_dto).collect(),
            total: self.total,
            page: self.page,
            size: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
