//! Producto entity as seen by the service and its HTTP clients.
//!
//! The identifier travels as the 24-character hex form of the store's
//! `ObjectId`. Translation to and from the native type belongs to the
//! storage layer.

use serde::{Deserialize, Deserializer, Serialize};

/// A product record.
///
/// Every field defaults when absent or `null` in a request body, so the same
/// type carries both full products (create) and partial ones (update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Producto {
    /// Store-assigned identifier, hex encoded. Ignored on input.
    pub id: Option<String>,
    /// Product name
    #[serde(deserialize_with = "null_as_default")]
    pub nombre: String,
    /// Free-form description
    #[serde(deserialize_with = "null_as_default")]
    pub descripcion: String,
    /// Unit price
    #[serde(deserialize_with = "null_as_default")]
    pub precio: f64,
}

/// `null` reads as the field's zero value, i.e. "not provided".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Producto {
    /// Build a product without an identifier.
    pub fn new(nombre: impl Into<String>, descripcion: impl Into<String>, precio: f64) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            descripcion: descripcion.into(),
            precio,
        }
    }
}

/// Field set applied by a partial update.
///
/// Only non-empty text and a non-zero price count as "provided". A price of
/// exactly `0.0` cannot be written through an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CambiosProducto {
    /// New name, if provided
    pub nombre: Option<String>,
    /// New description, if provided
    pub descripcion: Option<String>,
    /// New price, if provided
    pub precio: Option<f64>,
}

impl CambiosProducto {
    /// Collect the updatable fields of a partial product.
    pub fn from_parcial(parcial: &Producto) -> Self {
        Self {
            nombre: Some(parcial.nombre.clone()).filter(|s| !s.is_empty()),
            descripcion: Some(parcial.descripcion.clone()).filter(|s| !s.is_empty()),
            precio: Some(parcial.precio).filter(|p| *p != 0.0),
        }
    }

    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none() && self.descripcion.is_none() && self.precio.is_none()
    }

    /// Number of fields that would be written.
    pub fn len(&self) -> usize {
        [self.nombre.is_some(), self.descripcion.is_some(), self.precio.is_some()]
            .iter()
            .filter(|set| **set)
            .count()
    }
}

impl From<&Producto> for CambiosProducto {
    fn from(parcial: &Producto) -> Self {
        Self::from_parcial(parcial)
    }
}
