//! BSON document shape of a stored product

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::RepositoryError;
use crate::types::{CambiosProducto, Producto};

/// Product as persisted in the `productos` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductoDocument {
    /// Native identifier, absent until the store assigns it
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Product name
    #[serde(default)]
    pub nombre: String,
    /// Free-form description
    #[serde(default)]
    pub descripcion: String,
    /// Unit price
    #[serde(default)]
    pub precio: f64,
}

impl ProductoDocument {
    /// Build a document for insertion. Any client-supplied id is dropped.
    pub fn for_insert(producto: Producto) -> Self {
        Self {
            id: None,
            nombre: producto.nombre,
            descripcion: producto.descripcion,
            precio: producto.precio,
        }
    }

    /// Merge a field set into this document, leaving unset fields untouched.
    pub fn apply(&mut self, cambios: &CambiosProducto) {
        if let Some(nombre) = &cambios.nombre {
            self.nombre = nombre.clone();
        }
        if let Some(descripcion) = &cambios.descripcion {
            self.descripcion = descripcion.clone();
        }
        if let Some(precio) = cambios.precio {
            self.precio = precio;
        }
    }
}

impl From<ProductoDocument> for Producto {
    fn from(document: ProductoDocument) -> Self {
        Producto {
            id: document.id.map(|oid| oid.to_hex()),
            nombre: document.nombre,
            descripcion: document.descripcion,
            precio: document.precio,
        }
    }
}

/// Parse the external hex identifier into an `ObjectId`.
pub fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|e| RepositoryError::InvalidIdentifier(format!("'{}': {}", id, e)))
}

/// `$set` body for a field set.
pub fn set_document(cambios: &CambiosProducto) -> Document {
    let mut set = Document::new();
    if let Some(nombre) = &cambios.nombre {
        set.insert("nombre", nombre.as_str());
    }
    if let Some(descripcion) = &cambios.descripcion {
        set.insert("descripcion", descripcion.as_str());
    }
    if let Some(precio) = cambios.precio {
        set.insert("precio", precio);
    }
    doc! { "$set": set }
}
