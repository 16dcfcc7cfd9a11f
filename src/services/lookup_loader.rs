// ============================================================================
// LOOKUP LOADER - Carga de listas de referencia (una petición por lista)
// ============================================================================

use std::rc::Rc;
use serde_json::Value;
use crate::errors::FacadeError;
use crate::models::facade::{Action, FacadeRequest};
use crate::models::lookup::{scalar_text, LookupItem, LookupList, LookupSpec};
use crate::services::api_client::FacadeTransport;

#[derive(Clone)]
pub struct ReferenceDataLoader {
    transport: Rc<dyn FacadeTransport>,
}

impl ReferenceDataLoader {
    pub fn new(transport: Rc<dyn FacadeTransport>) -> Self {
        Self { transport }
    }

    /// Lista `spec.entity` y proyecta cada fila a (clave, etiqueta)
    pub async fn load_lookup(&self, spec: &LookupSpec) -> Result<LookupList, FacadeError> {
        let request = FacadeRequest::new(&spec.entity, Action::Listar);
        let data = self.transport.call(&request).await?.into_result()?;

        let rows = match data {
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                return Err(FacadeError::Decode(format!(
                    "se esperaba una lista de {}, se recibió {}",
                    spec.entity,
                    json_kind(&other)
                )))
            }
            None => {
                return Err(FacadeError::Decode(format!("respuesta sin datos para {}", spec.entity)))
            }
        };

        let total = rows.len();
        let items: Vec<LookupItem> = rows
            .iter()
            .filter_map(|row| {
                let key = row.get(&spec.key_field).and_then(scalar_text)?;
                let label = row.get(&spec.label_field).and_then(scalar_text)?;
                Some(LookupItem { key, label })
            })
            .collect();

        if items.len() < total {
            log::warn!(
                "⚠️ [LOOKUP] {}: {} filas sin '{}' o '{}' descartadas",
                spec.entity,
                total - items.len(),
                spec.key_field,
                spec.label_field
            );
        }
        log::info!("✅ [LOOKUP] Cargadas {} opciones de {}", items.len(), spec.entity);

        Ok(LookupList { items })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "un booleano",
        Value::Number(_) => "un número",
        Value::String(_) => "un texto",
        Value::Array(_) => "una lista",
        Value::Object(_) => "un objeto",
    }
}
