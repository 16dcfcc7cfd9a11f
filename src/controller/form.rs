// ============================================================================
// FORM LAYOUT - Campos del formulario de edición y su lectura/escritura
// ============================================================================

use serde_json::Value;
use crate::controller::traits::EditForm;
use crate::models::lookup::LookupSpec;
use crate::models::record::{Record, RecordKey};

/// Tipo del valor que se envía al servidor para un input de texto
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Decimal,
    Integer,
}

impl FieldKind {
    /// Vacío → `null`. Un número mal escrito se envía como texto y lo valida el servidor.
    pub fn parse(&self, raw: &str) -> Value {
        let trimmed = raw.trim();
        match self {
            FieldKind::Text => Value::from(raw.to_string()),
            _ if trimmed.is_empty() => Value::Null,
            FieldKind::Decimal => trimmed
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::from(trimmed.to_string())),
            FieldKind::Integer => trimmed
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(trimmed.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextField {
    pub field: String,
    pub element_id: String,
    pub kind: FieldKind,
}

impl TextField {
    pub fn new(field: &str, element_id: &str, kind: FieldKind) -> Self {
        Self {
            field: field.to_string(),
            element_id: element_id.to_string(),
            kind,
        }
    }
}

/// Lista desplegable alimentada por una lista de referencia
#[derive(Clone, Debug, PartialEq)]
pub struct SelectField {
    pub lookup: LookupSpec,
    pub element_id: String,
    /// Columna de la tabla que muestra la etiqueta elegida (p. ej. `categoria`)
    pub display_field: Option<String>,
}

/// Valores leídos del formulario
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    /// Lo que se envía a la fachada
    pub data: Record,
    /// Etiquetas de las listas para las columnas visibles de la tabla
    pub display: Record,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormLayout {
    pub text_fields: Vec<TextField>,
    pub selects: Vec<SelectField>,
    /// Input con la clave (posiblemente nueva) del registro, si el formulario la edita
    pub key_input: Option<TextField>,
}

impl FormLayout {
    /// Escribe los campos de texto desde la fila. No toca las listas desplegables.
    pub fn populate(&self, form: &dyn EditForm, record: &Record) {
        for text in self.text_fields.iter().chain(self.key_input.iter()) {
            form.set_text(&text.field, &record.text(&text.field));
        }
        form.refresh();
    }

    pub fn clear(&self, form: &dyn EditForm) {
        for text in self.text_fields.iter().chain(self.key_input.iter()) {
            form.set_text(&text.field, "");
        }
        form.refresh();
    }

    pub fn read(&self, form: &dyn EditForm, key_field: &str) -> FormValues {
        let mut values = FormValues::default();

        if let Some(key_input) = &self.key_input {
            let raw = form.text(&key_input.field);
            if !raw.trim().is_empty() {
                values.data.set(key_field, RecordKey::parse(&raw).to_value());
            }
        }

        for text in &self.text_fields {
            values.data.set(text.field.as_str(), text.kind.parse(&form.text(&text.field)));
        }

        // Sin selección el campo no se envía
        for select in &self.selects {
            let field = &select.lookup.field;
            if let Some(selected) = form.selected_value(field) {
                values.data.set(field.as_str(), RecordKey::parse(&selected).to_value());
                if let (Some(display), Some(label)) = (&select.display_field, form.selected_label(field)) {
                    values.display.set(display.as_str(), label);
                }
            }
        }

        values
    }

    pub fn element_id(&self, field: &str) -> Option<&str> {
        self.text_fields
            .iter()
            .chain(self.key_input.iter())
            .find(|t| t.field == field)
            .map(|t| t.element_id.as_str())
            .or_else(|| {
                self.selects
                    .iter()
                    .find(|s| s.lookup.field == field)
                    .map(|s| s.element_id.as_str())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lookup::{LookupItem, LookupList};
    use crate::testing::RecordingForm;
    use serde_json::json;

    fn layout() -> FormLayout {
        FormLayout {
            text_fields: vec![
                TextField::new("nombre", "producto-txtnombre", FieldKind::Text),
                TextField::new("precio", "producto-txtprecio", FieldKind::Decimal),
                TextField::new("cantidad_minima", "producto-txtminimo", FieldKind::Integer),
            ],
            selects: vec![SelectField {
                lookup: LookupSpec {
                    field: "id_categoria_producto".into(),
                    entity: "CategoriaProducto".into(),
                    key_field: "id_categoria_producto".into(),
                    label_field: "nombre".into(),
                    placeholder: "Seleccione".into(),
                },
                element_id: "producto-lstcategoria".into(),
                display_field: Some("categoria".into()),
            }],
            key_input: None,
        }
    }

    #[test]
    fn field_kinds_parse_input_text() {
        assert_eq!(FieldKind::Decimal.parse("12.50"), json!(12.5));
        assert_eq!(FieldKind::Decimal.parse("3,25"), json!(3.25));
        assert_eq!(FieldKind::Decimal.parse(" "), Value::Null);
        assert_eq!(FieldKind::Integer.parse("4"), json!(4));
        assert_eq!(FieldKind::Integer.parse("cuatro"), json!("cuatro"));
        assert_eq!(FieldKind::Text.parse(" Widget "), json!(" Widget "));
    }

    #[test]
    fn read_collects_text_and_selected_values() {
        let form = RecordingForm::new();
        let layout = layout();
        layout.populate(&form, &Record::from_value(json!({"nombre": "Widget", "precio": 9.99})).unwrap());
        form.set_text("precio", "12.50");
        form.fill_select(
            "id_categoria_producto",
            &LookupList { items: vec![LookupItem { key: "3".into(), label: "Pinturas".into() }] },
            "Seleccione",
        );
        form.select_value("id_categoria_producto", "3");

        let values = layout.read(&form, "id_producto");

        assert_eq!(
            values.data.into_value(),
            json!({
                "nombre": "Widget",
                "precio": 12.5,
                "cantidad_minima": null,
                "id_categoria_producto": 3
            })
        );
        assert_eq!(values.display.into_value(), json!({"categoria": "Pinturas"}));
    }

    #[test]
    fn unselected_lookup_is_not_sent() {
        let form = RecordingForm::new();
        let values = layout().read(&form, "id_producto");
        assert!(!values.data.contains("id_categoria_producto"));
        assert!(values.display.is_empty());
    }

    #[test]
    fn key_input_is_sent_under_key_field() {
        let mut layout = layout();
        layout.key_input = Some(TextField::new("id_producto", "producto-txtid", FieldKind::Integer));
        let form = RecordingForm::new();
        form.set_text("id_producto", "8");

        let values = layout.read(&form, "id_producto");
        assert_eq!(values.data.get("id_producto"), Some(&json!(8)));
        assert_eq!(layout.element_id("id_producto"), Some("producto-txtid"));
        assert_eq!(layout.element_id("id_categoria_producto"), Some("producto-lstcategoria"));
    }
}
