// ============================================================================
// GRID - Adaptador de la tabla (Tabulator en el navegador, memoria en tests)
// ============================================================================

pub mod memory;
pub mod tabulator;

pub use memory::MemoryGrid;
pub use tabulator::TabulatorGrid;

use std::fmt;
use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::errors::GridError;
use crate::models::facade::{Action, FacadeRequest};
use crate::models::record::{Record, RecordKey};

/// Id del botón "actualizar" en la columna de control
pub const EDIT_BUTTON_ID: &str = "tabulator-btnactualizar";
/// Id del botón "eliminar" en la columna de control
pub const DELETE_BUTTON_ID: &str = "tabulator-btneliminar";

/// Operaciones de la tabla que consume el controlador
pub trait GridHandle {
    /// Agrega una fila y devuelve su clave, si la trae. Una fila sin clave se
    /// muestra igual pero no se puede editar hasta recargar la tabla.
    fn add_row(&self, record: Record, position: RowPosition) -> Result<Option<RecordKey>, GridError>;

    fn update_row_by_key(&self, key: &RecordKey, patch: &Record) -> Result<(), GridError>;

    fn delete_row(&self, key: &RecordKey) -> Result<(), GridError>;

    fn get_row_data(&self, key: &RecordKey) -> Option<Record>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPosition {
    Top,
    Bottom,
}

/// Botón pulsado en la columna de control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlTarget {
    Edit,
    Delete,
}

impl ControlTarget {
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            EDIT_BUTTON_ID => Some(ControlTarget::Edit),
            DELETE_BUTTON_ID => Some(ControlTarget::Delete),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub dir: SortDir,
}

/// Formateadores de celda soportados
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFormatter {
    Money,
    /// Botones editar/eliminar con click por fila
    Controls,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDef {
    pub title: String,
    pub field: Option<String>,
    pub visible: bool,
    pub align: Option<Align>,
    pub width: Option<u32>,
    pub formatter: Option<CellFormatter>,
    pub header_sort: bool,
}

impl ColumnDef {
    pub fn new(title: &str, field: &str) -> Self {
        Self {
            title: title.to_string(),
            field: Some(field.to_string()),
            visible: true,
            align: None,
            width: None,
            formatter: None,
            header_sort: true,
        }
    }

    /// Columna de control (sin campo ni orden)
    pub fn controls(title: &str, width: u32) -> Self {
        Self {
            title: title.to_string(),
            field: None,
            visible: true,
            align: Some(Align::Center),
            width: Some(width),
            formatter: Some(CellFormatter::Controls),
            header_sort: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn formatter(mut self, formatter: CellFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }
}

/// Callback al agregar una fila (recibe la clave de la fila nueva)
pub type RowAddedHook = Rc<dyn Fn(&RecordKey)>;
/// Callback de la columna de control
pub type ControlClickHook = Rc<dyn Fn(ControlTarget, RecordKey)>;

/// Configuración de la tabla remota
#[derive(Clone)]
pub struct GridConfig {
    /// Selector del contenedor (p. ej. `#tabla-productos`)
    pub container: String,
    pub url: String,
    /// Parámetros fijos de la carga inicial (`clase` + `accion = seleccionar`)
    pub params: FacadeRequest,
    pub method: String,
    pub content_type: String,
    pub columns: Vec<ColumnDef>,
    pub initial_sort: Vec<SortSpec>,
    pub page_size: usize,
    /// Campo clave único usado como índice de fila
    pub index: String,
    pub add_row_pos: RowPosition,
    pub on_row_added: Option<RowAddedHook>,
    pub on_control_click: Option<ControlClickHook>,
}

impl GridConfig {
    pub fn new(container: &str, url: &str, entity: &str, index: &str) -> Self {
        Self {
            container: container.to_string(),
            url: url.to_string(),
            params: FacadeRequest::new(entity, Action::Seleccionar),
            method: "POST".to_string(),
            content_type: "json".to_string(),
            columns: Vec::new(),
            initial_sort: Vec::new(),
            page_size: 10,
            index: index.to_string(),
            add_row_pos: RowPosition::Top,
            on_row_added: None,
            on_control_click: None,
        }
    }

    pub fn with_row_added(mut self, hook: RowAddedHook) -> Self {
        self.on_row_added = Some(hook);
        self
    }

    pub fn with_control_click(mut self, hook: ControlClickHook) -> Self {
        self.on_control_click = Some(hook);
        self
    }
}

impl fmt::Debug for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridConfig")
            .field("container", &self.container)
            .field("url", &self.url)
            .field("params", &self.params)
            .field("columns", &self.columns.len())
            .field("initial_sort", &self.initial_sort)
            .field("page_size", &self.page_size)
            .field("index", &self.index)
            .field("add_row_pos", &self.add_row_pos)
            .finish()
    }
}
