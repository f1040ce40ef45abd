use std::path::Path as FsPath;
use std::sync::Arc;

use activity_roster_api::api::{ActivitiesResponse, EmailQuery, MessageResponse};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{delete, get, get_service, post};
use axum::{Json, Router};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::roster::RosterService;
use crate::store::{ActivityName, Email};

/// Shared roster, every mutation holds the write lock for its whole read-modify-write.
pub type AppState = Arc<RwLock<RosterService>>;

/// Where `GET /` sends browsers.
pub const INDEX_PATH: &str = "/static/index.html";

/// All routes of the server, with the front-end served from `static_dir`.
pub fn routes(state: AppState, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", delete(unregister))
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .with_state(state)
}

async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn list_activities(State(state): State<AppState>) -> Json<ActivitiesResponse> {
    log::debug!("sending activities");
    Json(state.read().await.list_activities())
}

async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = ActivityName::from(name);
    let Query(query) = query.map_err(ApiError::InvalidQuery)?;
    log::debug!(activity:display = name, email:display = query.email; "received signup");

    let result = state.write().await.signup(&name, Email::from(query.email));
    match result {
        Ok(confirmation) => Ok(Json(confirmation.into())),
        Err(e) => {
            log::debug!(activity:display = name, e:display; "signup rejected");
            Err(e.into())
        }
    }
}

async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = ActivityName::from(name);
    let Query(query) = query.map_err(ApiError::InvalidQuery)?;
    let email = Email::from(query.email);
    log::debug!(activity:display = name, email:display = email; "received unregister");

    let result = state.write().await.unregister(&name, &email);
    match result {
        Ok(confirmation) => Ok(Json(confirmation.into())),
        Err(e) => {
            log::debug!(activity:display = name, e:display; "unregister rejected");
            Err(e.into())
        }
    }
}
