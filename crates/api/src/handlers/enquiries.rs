//! Handlers for the `/enquiries` resource.
//!
//! Submission is public (the contact form posts here); the listing is for
//! the admin console. Enquiries are logged and persisted -- email dispatch
//! is deliberately absent.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gcrental_core::validation::FieldIssue;
use gcrental_db::models::enquiry::CreateEnquiry;
use gcrental_db::repositories::EnquiryRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /enquiries`. Snake_case wire names, matching
/// what the contact form submits.
#[derive(Debug, Deserialize)]
pub struct EnquiryRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub rental_duration: Option<String>,
    pub vehicle_interest: Option<String>,
    pub message: Option<String>,
}

impl EnquiryRequest {
    fn into_dto(self) -> Result<CreateEnquiry, AppError> {
        let mut issues = Vec::new();
        for (field, value) in [("name", &self.name), ("phone", &self.phone)] {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => issues.push(FieldIssue::new(field, format!("{field} is required"))),
            }
        }

        match (self.name, self.phone) {
            (Some(name), Some(phone)) if issues.is_empty() => Ok(CreateEnquiry {
                name,
                phone,
                email: self.email,
                rental_duration: self.rental_duration,
                vehicle_interest: self.vehicle_interest,
                message: self.message,
            }),
            _ => Err(AppError::validation("Name and phone are required", issues)),
        }
    }
}

/// POST /api/enquiries
///
/// Accept a contact-form enquiry. Logged with structured fields and
/// persisted for the admin console.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EnquiryRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = input.into_dto()?;

    tracing::info!(
        name = %dto.name,
        phone = %dto.phone,
        email = dto.email.as_deref().unwrap_or("not provided"),
        rental_duration = dto.rental_duration.as_deref().unwrap_or("not specified"),
        vehicle_interest = dto.vehicle_interest.as_deref().unwrap_or("not specified"),
        "New enquiry received"
    );

    EnquiryRepo::create(&state.pool, &dto).await?;
    Ok(Json(MessageResponse {
        message: "Enquiry received successfully",
    }))
}

/// GET /api/enquiries
///
/// List all enquiries, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<impl IntoResponse> {
    let enquiries = EnquiryRepo::list(&state.pool).await?;
    Ok(Json(enquiries))
}
