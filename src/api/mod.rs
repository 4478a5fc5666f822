//! # API Module
//!
//! HTTP interface for the Producto resource.
//!
//! ## Endpoints Overview
//!
//! ### Producto Operations
//! - `POST /productos` - Create producto
//! - `GET /productos` - List every producto
//! - `GET /productos/{id}` - Get producto by ID
//! - `PUT /productos/{id}` - Partial update, answers with the updated producto
//! - `DELETE /productos/{id}` - Delete producto
//!
//! ### System Essentials
//! - `GET /health` - Health check
//! - `GET /` - Service descriptor

pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;

// Re-export commonly used items
pub use handlers::{ActualizacionResponse, ErrorResponse, HealthResponse, MensajeResponse};
pub use server::{create_app, start_server};
