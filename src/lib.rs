// ============================================================================
// GESTIÓN DE PRODUCTOS - Tabla remota + formulario modal (RUST PURO / WASM)
// ============================================================================
// - Grid: Tabulator cargado desde la fachada (acción "seleccionar")
// - Controller: sesión de edición (insertar / actualizar / eliminar)
// - Services: comunicación con la fachada y listas de referencia
// - Dom: formulario, modal y avisos de Materialize
// ============================================================================

pub mod config;
pub mod controller;
pub mod dom;
pub mod errors;
pub mod grid;
pub mod models;
pub mod services;
pub mod state;
pub mod tables;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::controller::traits::BrowserSpawner;
use crate::controller::{Collaborators, RecordTableController};
use crate::dom::events::on_click_id;
use crate::dom::{DomForm, MaterializeModal, ToastNotifier};
use crate::grid::{ControlTarget, TabulatorGrid};
use crate::models::record::RecordKey;
use crate::services::ApiClient;
use crate::state::RowTracker;
use crate::tables::{productos, DomIds};

// Controlador de la página; los callbacks de Tabulator lo buscan aquí
thread_local! {
    static CONTROLLER: RefCell<Option<RecordTableController>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Gestión de productos ({})", CONFIG.environment);

    let table = productos::definition(CONFIG.page_size);
    let rows = RowTracker::new();

    let grid_config = table.grid_config(&CONFIG.fachada_url, rows.hook(), Rc::new(dispatch_control_click));
    let grid = TabulatorGrid::initialize(&grid_config)?;
    let modal = MaterializeModal::initialize(&table.dom.modal)?;
    let form = DomForm::new(table.form.clone());
    let dom = table.dom.clone();

    let controller = RecordTableController::new(
        table,
        Collaborators {
            transport: Rc::new(ApiClient::new()),
            grid: Rc::new(grid),
            form: Rc::new(form),
            modal: Rc::new(modal),
            notifier: Rc::new(ToastNotifier),
            spawner: Rc::new(BrowserSpawner),
        },
        rows,
    );

    bind_buttons(&controller, &dom)?;

    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(controller);
    });

    log::info!("✅ Tabla de productos lista");
    Ok(())
}

fn bind_buttons(controller: &RecordTableController, dom: &DomIds) -> Result<(), JsValue> {
    let c = controller.clone();
    on_click_id(&dom.add_button, move || c.add_record())?;

    let c = controller.clone();
    on_click_id(&dom.confirm_button, move || c.confirm())?;

    let c = controller.clone();
    on_click_id(&dom.cancel_button, move || c.cancel())?;

    Ok(())
}

// Se clona el controlador antes de despachar: el handler no debe correr con el slot prestado
fn dispatch_control_click(target: ControlTarget, key: RecordKey) {
    let controller = CONTROLLER.with(|slot| slot.borrow().clone());
    match controller {
        Some(controller) => controller.handle_control_click(target, key),
        None => log::warn!("⚠️ [GRID] Click en {:?} antes de inicializar el controlador", target),
    }
}
