// ============================================================================
// ERRORES - Fachada remota y tabla
// ============================================================================

use thiserror::Error;
use crate::models::record::RecordKey;

/// Fallo de una llamada a la fachada
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FacadeError {
    /// `ok=false`: el mensaje del servidor se muestra tal cual
    #[error("{0}")]
    Rejected(String),
    #[error("Error de red: {0}")]
    Transport(String),
    #[error("Respuesta inválida: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("no existe la fila con clave {0}")]
    RowNotFound(RecordKey),
    #[error("ya existe una fila con clave {0}")]
    DuplicateKey(RecordKey),
    #[error("error en la tabla: {0}")]
    Js(String),
}

/// Fallo de una operación de sincronización (insertar/actualizar/eliminar)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    #[error(transparent)]
    Facade(#[from] FacadeError),
    /// El servidor confirmó pero la tabla no pudo reflejarlo
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl SyncError {
    /// El servidor aceptó la escritura (solo falló reflejarla en la tabla)
    pub fn was_saved(&self) -> bool {
        matches!(self, SyncError::Grid(_))
    }
}
