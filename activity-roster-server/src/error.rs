use activity_roster_api::api::ErrorResponse;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Why a roster mutation was rejected.
///
/// The display text is sent to the client as `detail`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,

    /// Only returned with [`CapacityPolicy::Enforce`](crate::roster::CapacityPolicy).
    #[error("Activity is full")]
    ActivityFull,
}

impl RosterError {
    pub fn status_code(self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound | RosterError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            RosterError::AlreadyRegistered | RosterError::ActivityFull => StatusCode::BAD_REQUEST,
        }
    }
}

/// Everything a roster endpoint can answer with instead of a confirmation.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The query string is missing `email` or could not be decoded.
    #[error("{}", .0.body_text())]
    InvalidQuery(QueryRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Roster(e) => e.status_code(),
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
