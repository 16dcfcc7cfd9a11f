// ============================================================================
// LOOKUP - Listas de referencia para las listas desplegables del formulario
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Qué entidad listar y cómo proyectarla a (clave, etiqueta)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupSpec {
    /// Campo del registro (clave foránea) que edita la lista desplegable
    pub field: String,
    pub entity: String,
    pub key_field: String,
    pub label_field: String,
    pub placeholder: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupItem {
    pub key: String,
    pub label: String,
}

/// Lista de referencia de una sesión de edición (no se cachea)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupList {
    pub items: Vec<LookupItem>,
}

impl LookupList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.iter().any(|item| item.key == key)
    }
}

/// Texto de una celda JSON usado como clave o etiqueta de opción
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
