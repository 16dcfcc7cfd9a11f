// ============================================================================
// TABULATOR GRID - Binding a Tabulator (http://tabulator.info/)
// ============================================================================
// Las opciones se arman como JSON y se completan con closures JS para la
// columna de control, `rowAdded` y `ajaxResponse`. Los closures se olvidan
// (forget) porque viven lo mismo que la tabla.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use serde::Serialize;
use serde_json::{json, Value};
use crate::errors::GridError;
use crate::grid::{
    CellFormatter, ColumnDef, ControlClickHook, ControlTarget, GridConfig, GridHandle,
    RowAddedHook, RowPosition, DELETE_BUTTON_ID, EDIT_BUTTON_ID,
};
use crate::models::record::{Record, RecordKey};

mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[derive(Clone)]
        pub type Tabulator;

        #[wasm_bindgen(constructor)]
        pub fn new(selector: &str, options: &JsValue) -> Tabulator;

        #[wasm_bindgen(method, catch, js_name = addRow)]
        pub fn add_row(this: &Tabulator, data: &JsValue, add_to_top: bool) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = updateRow)]
        pub fn update_row(this: &Tabulator, index: &JsValue, data: &JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = deleteRow)]
        pub fn delete_row(this: &Tabulator, index: &JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, js_name = getRow)]
        pub fn get_row(this: &Tabulator, index: &JsValue) -> JsValue;
    }
}

fn control_buttons_html() -> String {
    format!(
        r#"<i id="{}" class="material-icons teal-text">edit</i>
<i id="{}" class="material-icons deep-orange-text">delete</i>"#,
        EDIT_BUTTON_ID, DELETE_BUTTON_ID
    )
}

#[derive(Clone)]
pub struct TabulatorGrid {
    table: ffi::Tabulator,
    index: String,
}

impl TabulatorGrid {
    /// Crea la tabla remota en `config.container`
    pub fn initialize(config: &GridConfig) -> Result<Self, JsValue> {
        let options = to_js(&options_json(config)).map_err(|e| JsValue::from_str(&e.to_string()))?;

        install_control_callbacks(&options, config)?;
        if let Some(hook) = config.on_row_added.clone() {
            install_row_added(&options, hook, config.index.clone())?;
        }
        install_ajax_response(&options)?;

        log::info!("📋 [GRID] Inicializando Tabulator en {} ({})", config.container, config.url);
        let table = ffi::Tabulator::new(&config.container, &options);

        Ok(Self {
            table,
            index: config.index.clone(),
        })
    }

    fn row(&self, key: &RecordKey) -> Option<JsValue> {
        let row = self.table.get_row(&key.to_value_js());
        if row.is_undefined() || row.is_null() || row.as_bool() == Some(false) {
            None
        } else {
            Some(row)
        }
    }
}

impl GridHandle for TabulatorGrid {
    fn add_row(&self, record: Record, position: RowPosition) -> Result<Option<RecordKey>, GridError> {
        let key = record.key(&self.index);
        if let Some(key) = &key {
            if self.row(key).is_some() {
                return Err(GridError::DuplicateKey(key.clone()));
            }
        }
        let data = to_js(&record)?;
        // rowAdded se dispara desde Tabulator
        let pending = self.table.add_row(&data, position == RowPosition::Top).map_err(js_error)?;
        watch_promise(pending, "addRow", key.as_ref().map(|k| k.to_string()).unwrap_or_default());
        Ok(key)
    }

    fn update_row_by_key(&self, key: &RecordKey, patch: &Record) -> Result<(), GridError> {
        if self.row(key).is_none() {
            return Err(GridError::RowNotFound(key.clone()));
        }
        let data = to_js(patch)?;
        let pending = self.table.update_row(&key.to_value_js(), &data).map_err(js_error)?;
        watch_promise(pending, "updateRow", key.to_string());
        Ok(())
    }

    fn delete_row(&self, key: &RecordKey) -> Result<(), GridError> {
        if self.row(key).is_none() {
            return Err(GridError::RowNotFound(key.clone()));
        }
        let pending = self.table.delete_row(&key.to_value_js()).map_err(js_error)?;
        watch_promise(pending, "deleteRow", key.to_string());
        Ok(())
    }

    fn get_row_data(&self, key: &RecordKey) -> Option<Record> {
        let row = self.row(key)?;
        match row_data(&row) {
            Ok(record) => Some(record),
            Err(e) => {
                log::error!("❌ [GRID] No se pudieron leer los datos de la fila {}: {}", key, e);
                None
            }
        }
    }
}

trait KeyToJs {
    fn to_value_js(&self) -> JsValue;
}

impl KeyToJs for RecordKey {
    fn to_value_js(&self) -> JsValue {
        match self {
            RecordKey::Int(n) => JsValue::from_f64(*n as f64),
            RecordKey::Text(s) => JsValue::from_str(s),
        }
    }
}

fn options_json(config: &GridConfig) -> Value {
    let columns: Vec<Value> = config.columns.iter().map(column_json).collect();
    let initial_sort: Vec<Value> = config
        .initial_sort
        .iter()
        .map(|s| json!({"column": s.column, "dir": s.dir}))
        .collect();

    json!({
        "ajaxURL": config.url,
        "ajaxParams": config.params,
        "ajaxConfig": config.method,
        "ajaxContentType": config.content_type,
        "layout": "fitColumns",
        "responsiveLayout": "hide",
        "tooltips": true,
        "addRowPos": config.add_row_pos,
        "history": true,
        "pagination": "local",
        "paginationSize": config.page_size,
        "movableColumns": true,
        "resizableRows": true,
        "initialSort": initial_sort,
        "columns": columns,
        "index": config.index,
    })
}

fn column_json(column: &ColumnDef) -> Value {
    let mut def = json!({
        "title": column.title,
        "visible": column.visible,
        "headerSort": column.header_sort,
    });
    if let Some(field) = &column.field {
        def["field"] = json!(field);
    }
    if let Some(align) = column.align {
        def["align"] = json!(align);
    }
    if let Some(width) = column.width {
        def["width"] = json!(width);
    }
    if column.formatter == Some(CellFormatter::Money) {
        def["formatter"] = json!("money");
    }
    def
}

/// Formatter y cellClick de las columnas de control
fn install_control_callbacks(options: &JsValue, config: &GridConfig) -> Result<(), JsValue> {
    let columns = js_sys::Reflect::get(options, &JsValue::from_str("columns"))?;
    let columns: js_sys::Array = columns.dyn_into()?;

    for (i, column) in config.columns.iter().enumerate() {
        if column.formatter != Some(CellFormatter::Controls) {
            continue;
        }
        let target = columns.get(i as u32);

        let html = control_buttons_html();
        let formatter = Closure::wrap(Box::new(move |_cell: JsValue, _params: JsValue| -> JsValue {
            JsValue::from_str(&html)
        }) as Box<dyn FnMut(JsValue, JsValue) -> JsValue>);
        js_sys::Reflect::set(&target, &JsValue::from_str("formatter"), formatter.as_ref())?;
        formatter.forget();

        if let Some(hook) = config.on_control_click.clone() {
            let cell_click = control_click_closure(hook, config.index.clone());
            js_sys::Reflect::set(&target, &JsValue::from_str("cellClick"), cell_click.as_ref())?;
            cell_click.forget();
        }
    }
    Ok(())
}

fn control_click_closure(hook: ControlClickHook, index: String) -> Closure<dyn FnMut(web_sys::Event, JsValue)> {
    Closure::wrap(Box::new(move |e: web_sys::Event, cell: JsValue| {
        let target_id = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.id())
            .unwrap_or_default();

        // Click en la celda pero fuera de los botones
        let Some(target) = ControlTarget::from_element_id(&target_id) else {
            return;
        };

        let key = call_method(&cell, "getRow")
            .and_then(|row| row_data(&row).map_err(|e| JsValue::from_str(&e.to_string())))
            .ok()
            .and_then(|record| record.key(&index));

        match key {
            Some(key) => hook(target, key),
            None => log::error!("❌ [GRID] Fila sin clave '{}' en la columna de control", index),
        }
    }) as Box<dyn FnMut(web_sys::Event, JsValue)>)
}

fn install_row_added(options: &JsValue, hook: RowAddedHook, index: String) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |row: JsValue| {
        match row_data(&row).ok().and_then(|record| record.key(&index)) {
            Some(key) => hook(&key),
            None => log::warn!("⚠️ [GRID] rowAdded sin clave '{}'", index),
        }
    }) as Box<dyn FnMut(JsValue)>);
    js_sys::Reflect::set(options, &JsValue::from_str("rowAdded"), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// La fachada responde `{ok, data}`; Tabulator espera el arreglo de filas
fn install_ajax_response(options: &JsValue) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(|_url: JsValue, _params: JsValue, response: JsValue| -> JsValue {
        let ok = js_sys::Reflect::get(&response, &JsValue::from_str("ok"))
            .ok()
            .and_then(|v| v.as_bool());
        match ok {
            Some(true) => js_sys::Reflect::get(&response, &JsValue::from_str("data"))
                .unwrap_or_else(|_| js_sys::Array::new().into()),
            Some(false) => {
                let mensaje = js_sys::Reflect::get(&response, &JsValue::from_str("mensaje"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                log::error!("❌ [GRID] Carga inicial rechazada: {}", mensaje);
                js_sys::Array::new().into()
            }
            // Respuesta sin envoltura: ya es el arreglo de filas
            None => response,
        }
    }) as Box<dyn FnMut(JsValue, JsValue, JsValue) -> JsValue>);
    js_sys::Reflect::set(options, &JsValue::from_str("ajaxResponse"), closure.as_ref())?;
    closure.forget();
    Ok(())
}

fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let method: js_sys::Function = js_sys::Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    method.call0(target)
}

fn row_data(row: &JsValue) -> Result<Record, GridError> {
    let data = call_method(row, "getData").map_err(js_error)?;
    serde_wasm_bindgen::from_value(data).map_err(|e| GridError::Js(e.to_string()))
}

/// Mapas como objetos JS planos (lo que Tabulator espera)
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, GridError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| GridError::Js(e.to_string()))
}

/// addRow/updateRow/deleteRow devuelven una Promise; un rechazo queda en el log
fn watch_promise(pending: JsValue, method: &'static str, key: String) {
    let Ok(promise) = pending.dyn_into::<js_sys::Promise>() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::error!("❌ [GRID] {} rechazado por Tabulator (fila {}): {}", method, key, js_error(e));
        }
    });
}

fn js_error(e: JsValue) -> GridError {
    GridError::Js(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}
