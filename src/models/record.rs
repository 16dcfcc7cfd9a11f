// ============================================================================
// RECORD - Fila de la tabla (mapa campo → valor escalar)
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Valor de la clave única de una fila (índice de la tabla)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Int(i64),
    Text(String),
}

impl RecordKey {
    /// Extrae la clave de un valor JSON. Los números no enteros y los textos
    /// vacíos no son claves válidas.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordKey::Int),
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(Self::parse(s)),
            _ => None,
        }
    }

    /// Interpreta el texto de un input: si es entero se trata como `Int`
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) => RecordKey::Int(n),
            Err(_) => RecordKey::Text(raw.to_string()),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            RecordKey::Int(n) => Value::from(*n),
            RecordKey::Text(s) => Value::from(s.clone()),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Int(n) => write!(f, "{}", n),
            RecordKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        RecordKey::Text(s.to_string())
    }
}

/// Registro opaco: nombre de campo → valor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Construye un registro a partir de un objeto JSON; `None` si no es objeto
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn key(&self, key_field: &str) -> Option<RecordKey> {
        self.get(key_field).and_then(RecordKey::from_value)
    }

    /// Texto a mostrar en un input. `null` o ausente → cadena vacía.
    pub fn text(&self, field: &str) -> String {
        match self.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Sobrescribe los campos presentes en `patch`
    pub fn merge(&mut self, patch: &Record) {
        for (field, value) in patch.0.iter() {
            self.0.insert(field.clone(), value.clone());
        }
    }

    /// Copia del registro sin los campos indicados
    pub fn without(&self, fields: &[&str]) -> Record {
        let mut copy = self.clone();
        for field in fields {
            copy.0.remove(*field);
        }
        copy
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_parsing_prefers_integers() {
        assert_eq!(RecordKey::parse(" 42 "), RecordKey::Int(42));
        assert_eq!(RecordKey::parse("ABC-1"), RecordKey::Text("ABC-1".into()));
        assert_eq!(RecordKey::from_value(&json!("7")), Some(RecordKey::Int(7)));
        assert_eq!(RecordKey::from_value(&json!(9.5)), None);
        assert_eq!(RecordKey::from_value(&json!("")), None);
        assert_eq!(RecordKey::from_value(&Value::Null), None);
    }

    #[test]
    fn text_renders_scalars_for_inputs() {
        let record = Record::from_value(json!({
            "nombre": "Widget",
            "precio": 9.99,
            "cantidad_disponible": 3,
            "nota": null
        }))
        .unwrap();

        assert_eq!(record.text("nombre"), "Widget");
        assert_eq!(record.text("precio"), "9.99");
        assert_eq!(record.text("cantidad_disponible"), "3");
        assert_eq!(record.text("nota"), "");
        assert_eq!(record.text("inexistente"), "");
    }

    #[test]
    fn merge_and_without() {
        let mut row = Record::from_value(json!({"id_producto": 7, "precio": 9.99})).unwrap();
        let patch = Record::from_value(json!({"id_producto": 8, "id_actual": 7, "precio": 12.5})).unwrap();

        row.merge(&patch.without(&["id_producto", "id_actual"]));

        assert_eq!(row.key("id_producto"), Some(RecordKey::Int(7)));
        assert_eq!(row.get("precio"), Some(&json!(12.5)));
        assert!(!row.contains("id_actual"));
    }
}
