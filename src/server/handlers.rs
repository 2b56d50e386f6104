//! HTTP handlers for the contacts API.
//!
//! Thin adapter between the wire and the contact service: parses bodies,
//! maps service errors onto status codes, and wraps payloads in the
//! `{success, data?, error?}` envelope.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::error::ContactApiError;
use crate::models::{all_countries, ContactData};
use crate::services::ContactService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>) -> Self {
        Self { service }
    }
}

/// Build the full application router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/countries", get(countries_handler))
        .route(
            "/contacts",
            get(list_contacts_handler)
                .post(create_contact_handler)
                .options(contacts_preflight_handler),
        )
        .route(
            "/contacts/{id}",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler)
                .options(contact_item_preflight_handler),
        )
        .layer(middleware::map_response(apply_cors))
        .with_state(state)
}

/// Add permissive cross-origin headers to every response.
async fn apply_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

fn success_response(status: StatusCode, data: impl Serialize) -> Response {
    (status, Json(json!({"success": true, "data": data}))).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "error": message}))).into_response()
}

/// Map a service error onto its wire status code.
fn map_error(err: ContactApiError) -> Response {
    let status = match &err {
        ContactApiError::Validation(_) => StatusCode::BAD_REQUEST,
        ContactApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ContactApiError::Conflict(_) => StatusCode::CONFLICT,
        ContactApiError::Internal(_) => {
            error!("internal error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, &err.to_string())
}

/// Parse a create/update request body, producing the wire-exact error
/// responses for empty and malformed bodies.
fn parse_body(body: &Bytes) -> Result<ContactData, Response> {
    if body.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Request body is required",
        ));
    }
    serde_json::from_slice(body).map_err(|_| {
        error_response(StatusCode::BAD_REQUEST, "Invalid JSON in request body")
    })
}

/// Empty 200 preflight response advertising the methods of a route.
fn preflight_response(allowed_methods: &'static str) -> Response {
    let mut response = StatusCode::OK.into_response();
    response.headers_mut().insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(allowed_methods),
    );
    response
}

async fn health_handler() -> Response {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
    .into_response()
}

async fn countries_handler() -> Response {
    success_response(StatusCode::OK, all_countries())
}

async fn list_contacts_handler(State(state): State<AppState>) -> Response {
    match state.service.list_contacts().await {
        Ok(contacts) => success_response(StatusCode::OK, contacts),
        Err(err) => map_error(err),
    }
}

async fn get_contact_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.service.get_contact(&id).await {
        Ok(Some(contact)) => success_response(StatusCode::OK, contact),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Contact not found"),
        Err(err) => map_error(err),
    }
}

async fn create_contact_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let data = match parse_body(&body) {
        Ok(data) => data,
        Err(response) => return response,
    };

    match state.service.create_contact(data).await {
        Ok(contact) => success_response(StatusCode::CREATED, contact),
        Err(err) => map_error(err),
    }
}

async fn update_contact_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let data = match parse_body(&body) {
        Ok(data) => data,
        Err(response) => return response,
    };

    match state.service.update_contact(&id, data).await {
        Ok(contact) => success_response(StatusCode::OK, contact),
        Err(err) => map_error(err),
    }
}

async fn delete_contact_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.service.delete_contact(&id).await {
        Ok(true) => success_response(StatusCode::OK, json!({"deleted": true})),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Contact not found"),
        Err(err) => map_error(err),
    }
}

async fn contacts_preflight_handler() -> Response {
    preflight_response("GET, POST, OPTIONS")
}

async fn contact_item_preflight_handler() -> Response {
    preflight_response("GET, PUT, DELETE, OPTIONS")
}
