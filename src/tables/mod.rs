// ============================================================================
// TABLES - Definición de la tabla gestionada (entidad, columnas, formulario)
// ============================================================================

pub mod productos;

use crate::controller::form::FormLayout;
use crate::grid::{ColumnDef, ControlClickHook, GridConfig, RowAddedHook, RowPosition, SortSpec};

/// Ids de los elementos del DOM que acompañan a la tabla
#[derive(Clone, Debug, PartialEq)]
pub struct DomIds {
    pub modal: String,
    pub add_button: String,
    pub confirm_button: String,
    pub cancel_button: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableDefinition {
    /// Clase en la fachada (p. ej. `Producto`)
    pub entity: String,
    /// Nombre para los mensajes al usuario (p. ej. `producto`)
    pub entity_label: String,
    pub container: String,
    pub key_field: String,
    pub columns: Vec<ColumnDef>,
    pub initial_sort: Vec<SortSpec>,
    pub page_size: usize,
    pub add_row_pos: RowPosition,
    pub form: FormLayout,
    pub dom: DomIds,
}

impl TableDefinition {
    pub fn grid_config(
        &self,
        url: &str,
        on_row_added: RowAddedHook,
        on_control_click: ControlClickHook,
    ) -> GridConfig {
        let mut config = GridConfig::new(&self.container, url, &self.entity, &self.key_field)
            .with_row_added(on_row_added)
            .with_control_click(on_control_click);
        config.columns = self.columns.clone();
        config.initial_sort = self.initial_sort.clone();
        config.page_size = self.page_size;
        config.add_row_pos = self.add_row_pos;
        config
    }
}
