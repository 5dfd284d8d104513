//! Handlers for the `/cars` resource.
//!
//! The listing is public; every mutation requires the admin role. Request
//! bodies are validated field-by-field before the store is touched, and
//! failures come back as a 400 with an `issues` array naming each
//! offending field.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gcrental_core::error::CoreError;
use gcrental_core::types::DbId;
use gcrental_core::validation::{boolish, issues_from, parse_bool_token, FieldIssue};
use gcrental_db::models::car::{CreateCar, UpdateCar};
use gcrental_db::repositories::CarRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::AvailabilityParams;
use crate::response::{CreatedResponse, DataResponse, ListResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /cars`.
///
/// Required fields are `Option` so their absence surfaces as a field
/// issue rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, message = "make must not be empty"))]
    pub make: Option<String>,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: Option<String>,
    #[validate(range(min = 1950, max = 2035, message = "year must be a plausible vehicle year"))]
    pub year: Option<i32>,
    #[validate(range(min = 0.0, message = "weeklyRate must be non-negative"))]
    pub weekly_rate: Option<f64>,
    /// Accepts a boolean, a `"true"`/`"false"`/`"1"`/`"0"` string, or a
    /// 0/1 number; stored as 0/1 either way. Defaults to available.
    #[serde(default, deserialize_with = "boolish::deserialize")]
    pub available: Option<bool>,
    #[validate(length(min = 1, message = "licensePlate must not be empty"))]
    pub license_plate: Option<String>,
    pub image_url: Option<String>,
}

impl CreateCarRequest {
    /// Validate and convert into the insert DTO, or collect every field
    /// issue into one 400.
    fn into_dto(self) -> Result<CreateCar, AppError> {
        let mut issues = Vec::new();
        if let Err(errors) = self.validate() {
            issues.extend(issues_from(&errors));
        }
        for (field, missing) in [
            ("make", self.make.is_none()),
            ("model", self.model.is_none()),
            ("year", self.year.is_none()),
            ("weeklyRate", self.weekly_rate.is_none()),
            ("licensePlate", self.license_plate.is_none()),
        ] {
            if missing {
                issues.push(FieldIssue::new(field, format!("{field} is required")));
            }
        }

        match (
            self.make,
            self.model,
            self.year,
            self.weekly_rate,
            self.license_plate,
        ) {
            (Some(make), Some(model), Some(year), Some(weekly_rate), Some(license_plate))
                if issues.is_empty() =>
            {
                Ok(CreateCar {
                    make,
                    model,
                    year,
                    weekly_rate,
                    available: self.available.unwrap_or(true),
                    license_plate,
                    image_url: self.image_url,
                })
            }
            _ => Err(AppError::validation("Invalid car payload", issues)),
        }
    }
}

/// Request body for `PATCH /cars/{id}`. All fields optional; only the
/// supplied ones change.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, message = "make must not be empty"))]
    pub make: Option<String>,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: Option<String>,
    #[validate(range(min = 1950, max = 2035, message = "year must be a plausible vehicle year"))]
    pub year: Option<i32>,
    #[validate(range(min = 0.0, message = "weeklyRate must be non-negative"))]
    pub weekly_rate: Option<f64>,
    #[serde(default, deserialize_with = "boolish::deserialize")]
    pub available: Option<bool>,
    #[validate(length(min = 1, message = "licensePlate must not be empty"))]
    pub license_plate: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateCarRequest {
    fn into_dto(self) -> Result<UpdateCar, AppError> {
        if let Err(errors) = self.validate() {
            return Err(AppError::validation(
                "Invalid car payload",
                issues_from(&errors),
            ));
        }
        Ok(UpdateCar {
            make: self.make,
            model: self.model,
            year: self.year,
            weekly_rate: self.weekly_rate,
            available: self.available,
            license_plate: self.license_plate,
            image_url: self.image_url,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/cars?available=true|false
///
/// List the fleet. The availability filter is tri-state: absent means
/// everything; any value that is not a recognized boolean token is a 400.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<impl IntoResponse> {
    let available = match params.available.as_deref() {
        None => None,
        Some(raw) => match parse_bool_token(raw) {
            Some(flag) => Some(flag),
            None => {
                return Err(AppError::validation(
                    "Invalid query parameters",
                    vec![FieldIssue::new(
                        "available",
                        format!("unrecognized boolean token: {raw:?}"),
                    )],
                ))
            }
        },
    };

    let cars = CarRepo::list(&state.pool, available).await?;
    Ok(Json(ListResponse {
        count: cars.len(),
        data: cars,
    }))
}

/// POST /api/cars
///
/// Create a car. A duplicate license plate surfaces as a 409, not a
/// generic store error.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCarRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = input.into_dto()?;
    let car = CarRepo::create(&state.pool, &dto).await?;
    tracing::info!(car_id = car.id, plate = %car.license_plate, "Car created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Car created successfully",
            id: car.id,
        }),
    ))
}

/// PATCH /api/cars/{id}
///
/// Partial update. A non-numeric id is rejected by the path extractor
/// before this body runs; an id that matches nothing is a 404.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCarRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = input.into_dto()?;
    let car = CarRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Car", id }))?;
    Ok(Json(DataResponse { data: car }))
}

/// DELETE /api/cars/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CarRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Car", id }))
    }
}
