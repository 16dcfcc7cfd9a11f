// ============================================================================
// PRODUCTOS - Tabla de productos (Tabulator + formulario modal)
// ============================================================================

use crate::controller::form::{FieldKind, FormLayout, SelectField, TextField};
use crate::grid::{Align, CellFormatter, ColumnDef, RowPosition, SortDir, SortSpec};
use crate::models::lookup::LookupSpec;
use crate::tables::{DomIds, TableDefinition};

pub fn definition(page_size: usize) -> TableDefinition {
    TableDefinition {
        entity: "Producto".to_string(),
        entity_label: "producto".to_string(),
        container: "#tabla-productos".to_string(),
        key_field: "id_producto".to_string(),
        columns: vec![
            ColumnDef::controls("Control", 65),
            ColumnDef::new("ID", "id_producto").hidden(),
            ColumnDef::new("Categoría", "categoria").width(100),
            ColumnDef::new("Presentación", "presentacion").width(100),
            ColumnDef::new("Nombre", "nombre").width(200),
            ColumnDef::new("Precio", "precio")
                .align(Align::Right)
                .formatter(CellFormatter::Money),
            ColumnDef::new("Disponible", "cantidad_disponible").align(Align::Center).width(70),
            ColumnDef::new("Mínimo", "cantidad_minima").align(Align::Center).width(70),
            ColumnDef::new("Máximo", "cantidad_maxima").align(Align::Center).width(70),
        ],
        initial_sort: vec![SortSpec {
            column: "nombre".to_string(),
            dir: SortDir::Asc,
        }],
        page_size,
        add_row_pos: RowPosition::Top,
        form: FormLayout {
            text_fields: vec![
                TextField::new("nombre", "producto-txtnombre", FieldKind::Text),
                TextField::new("precio", "producto-txtprecio", FieldKind::Decimal),
                TextField::new("cantidad_disponible", "producto-txtcantidad", FieldKind::Integer),
                TextField::new("cantidad_minima", "producto-txtminimo", FieldKind::Integer),
                TextField::new("cantidad_maxima", "producto-txtmaximo", FieldKind::Integer),
            ],
            selects: vec![
                SelectField {
                    lookup: LookupSpec {
                        field: "id_categoria_producto".to_string(),
                        entity: "CategoriaProducto".to_string(),
                        key_field: "id_categoria_producto".to_string(),
                        label_field: "nombre".to_string(),
                        placeholder: "Seleccione una categoría de producto".to_string(),
                    },
                    element_id: "producto-lstcategoria".to_string(),
                    display_field: Some("categoria".to_string()),
                },
                SelectField {
                    lookup: LookupSpec {
                        field: "id_presentacion_producto".to_string(),
                        entity: "PresentacionProducto".to_string(),
                        key_field: "id_presentacion_producto".to_string(),
                        label_field: "descripcion".to_string(),
                        placeholder: "Seleccione una presentación de producto".to_string(),
                    },
                    element_id: "producto-lstpresentacion".to_string(),
                    display_field: Some("presentacion".to_string()),
                },
            ],
            key_input: None,
        },
        dom: DomIds {
            modal: "producto-frmedicion".to_string(),
            add_button: "producto-btnagregar".to_string(),
            confirm_button: "producto-btnaceptar".to_string(),
            cancel_button: "producto-btncancelar".to_string(),
        },
    }
}
