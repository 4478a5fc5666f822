//! HTTP request handlers for the Producto API
//!
//! Each handler translates one request into a service call and maps the
//! service's errors onto a fixed, coarse set of status codes.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use super::extract::{JsonRequest, ProductoId};
use crate::core::{AppState, StorageType};
use crate::service::ServiceError;
use crate::types::Producto;

/// Confirmation message body
#[derive(Debug, Serialize, Deserialize)]
pub struct MensajeResponse {
    /// Human readable confirmation
    pub mensaje: String,
}

/// Body returned by a successful update
#[derive(Debug, Serialize, Deserialize)]
pub struct ActualizacionResponse {
    /// Human readable confirmation
    pub mensaje: String,
    /// The product as re-read after the update, `null` if that read failed
    pub producto: Option<Producto>,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Build a failure body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// System health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Current system status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

fn mensaje(texto: &str) -> Json<MensajeResponse> {
    Json(MensajeResponse {
        mensaje: texto.to_string(),
    })
}

/// Status code for a failed update. Everything not itemized is a 500.
fn update_error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::EmptyIdentifier | ServiceError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
        ServiceError::ProductNotFound => StatusCode::NOT_FOUND,
        ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /productos`
pub async fn create_producto(
    State(state): State<AppState>,
    JsonRequest(producto): JsonRequest<Producto>,
) -> Result<(StatusCode, Json<MensajeResponse>), ApiError> {
    match state.productos.create(producto).await {
        Ok(id) => {
            info!(%id, "Producto created");
            Ok((StatusCode::CREATED, mensaje("Producto creado correctamente")))
        }
        Err(e) => {
            error!("Failed to create producto: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al crear el producto",
            ))
        }
    }
}

/// `GET /productos`
pub async fn list_productos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Producto>>, ApiError> {
    state.productos.list_all().await.map(Json).map_err(|e| {
        error!("Failed to list productos: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Error al obtener productos")
    })
}

/// `GET /productos/{id}`
pub async fn get_producto(
    State(state): State<AppState>,
    ProductoId(id): ProductoId,
) -> Result<Json<Producto>, ApiError> {
    if id.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "ID del producto requerido"));
    }

    state.productos.get_by_id(&id).await.map(Json).map_err(|e| {
        warn!(%id, "Producto lookup failed: {}", e);
        api_error(StatusCode::NOT_FOUND, "Producto no encontrado")
    })
}

/// `PUT /productos/{id}`
///
/// After a successful update the product is read back. A failed read-back
/// still answers 200, with `producto: null`.
pub async fn update_producto(
    State(state): State<AppState>,
    ProductoId(id): ProductoId,
    JsonRequest(parcial): JsonRequest<Producto>,
) -> Result<Json<ActualizacionResponse>, ApiError> {
    if let Err(e) = state.productos.update(&id, parcial).await {
        let status = update_error_status(&e);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(%id, "Failed to update producto: {}", e);
            return Err(api_error(status, "Error interno del servidor"));
        }
        warn!(%id, "Rejected producto update: {}", e);
        return Err(api_error(status, e.to_string()));
    }

    let producto = match state.productos.get_by_id(&id).await {
        Ok(producto) => Some(producto),
        Err(e) => {
            warn!(%id, "Updated producto could not be read back: {}", e);
            None
        }
    };

    info!(%id, "Producto updated");
    Ok(Json(ActualizacionResponse {
        mensaje: "Producto actualizado correctamente".to_string(),
        producto,
    }))
}

/// `DELETE /productos/{id}`
pub async fn delete_producto(
    State(state): State<AppState>,
    ProductoId(id): ProductoId,
) -> Result<Json<MensajeResponse>, ApiError> {
    if id.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "ID del producto requerido"));
    }

    match state.productos.delete(&id).await {
        Ok(()) => {
            info!(%id, "Producto deleted");
            Ok(mensaje("Producto eliminado correctamente"))
        }
        Err(e) => {
            error!(%id, "Failed to delete producto: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al eliminar el producto",
            ))
        }
    }
}

// System handlers

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Root API endpoint
pub async fn root_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let storage = match state.config.storage.storage_type {
        StorageType::Mongo => "mongo",
        StorageType::Memory => "memory",
    };

    Json(json!({
        "service": "producto-service",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "storage": storage,
        "endpoints": {
            "productos": "/productos",
            "health": "/health"
        }
    }))
}
