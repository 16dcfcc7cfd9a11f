// ============================================================================
// FACHADA - Formato de request/response del controlador de fachada
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::errors::FacadeError;
use crate::models::record::{Record, RecordKey};

/// Acción solicitada a la fachada
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Seleccionar,
    Listar,
    Insertar,
    Actualizar,
    Eliminar,
}

/// Request `{clase, accion, data?, <clave>?}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacadeRequest {
    pub clase: String,
    pub accion: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Parámetros de primer nivel (p. ej. la clave en `eliminar`)
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl FacadeRequest {
    pub fn new(clase: &str, accion: Action) -> Self {
        Self {
            clase: clase.to_string(),
            accion,
            data: None,
            params: Map::new(),
        }
    }

    pub fn with_data(mut self, data: Record) -> Self {
        self.data = Some(data.into_value());
        self
    }

    pub fn with_key(mut self, key_field: &str, key: &RecordKey) -> Self {
        self.params.insert(key_field.to_string(), key.to_value());
        self
    }
}

/// Response `{ok, mensaje?, data?}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FacadeResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl FacadeResponse {
    pub fn ok(data: Option<Value>) -> Self {
        Self { ok: true, mensaje: None, data }
    }

    pub fn rejected(mensaje: &str) -> Self {
        Self {
            ok: false,
            mensaje: Some(mensaje.to_string()),
            data: None,
        }
    }

    /// `ok=false` se convierte en `FacadeError::Rejected` con el mensaje del servidor
    pub fn into_result(self) -> Result<Option<Value>, FacadeError> {
        if self.ok {
            Ok(self.data)
        } else {
            let mensaje = self
                .mensaje
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "El servidor rechazó la operación".to_string());
            Err(FacadeError::Rejected(mensaje))
        }
    }
}
