use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::Activity;
use crate::services::roster_service;
use crate::store::{RosterError, RosterStore};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(store): State<Arc<RosterStore>>,
) -> Json<IndexMap<String, Activity>> {
    Json(roster_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<Arc<RosterStore>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    roster_service::signup(&store, &activity, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!("Signup rejected for {} / {}: {}", activity, query.email, e);
            reject(e)
        })
}

pub async fn unregister_handler(
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<Arc<RosterStore>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    roster_service::unregister(&store, &activity, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(
                "Unregister rejected for {} / {}: {}",
                activity, query.email, e
            );
            reject(e)
        })
}

fn reject(e: RosterError) -> (StatusCode, Json<Value>) {
    let status = match e {
        RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
        RosterError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        // "Not enrolled" is a missing membership resource, not a bad request.
        RosterError::NotSignedUp => StatusCode::NOT_FOUND,
    };
    (status, Json(serde_json::json!({ "detail": e.to_string() })))
}
