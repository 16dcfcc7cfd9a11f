// ============================================================================
// MODAL - Diálogo de edición (M.Modal, no se cierra al hacer click fuera)
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::controller::traits::ModalDialog;
use crate::dom::element::require_element;
use crate::dom::materialize;

pub struct MaterializeModal {
    instance: JsValue,
    open: Rc<Cell<bool>>,
}

impl MaterializeModal {
    pub fn initialize(element_id: &str) -> Result<Self, JsValue> {
        let element = require_element(element_id)?;
        let instance = materialize::init_modal(&element)?;
        log::debug!("🪟 [MODAL] #{} inicializado", element_id);
        Ok(Self {
            instance,
            open: Rc::new(Cell::new(false)),
        })
    }

    fn call(&self, method: &str) {
        let result = js_sys::Reflect::get(&self.instance, &JsValue::from_str(method))
            .and_then(|f| f.dyn_into::<js_sys::Function>())
            .and_then(|f| f.call0(&self.instance));
        if let Err(e) = result {
            log::error!("❌ [MODAL] {} falló: {:?}", method, e);
        }
    }
}

impl ModalDialog for MaterializeModal {
    fn open(&self) {
        self.call("open");
        self.open.set(true);
    }

    fn close(&self) {
        self.call("close");
        self.open.set(false);
    }

    fn is_open(&self) -> bool {
        js_sys::Reflect::get(&self.instance, &JsValue::from_str("isOpen"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or_else(|| self.open.get())
    }
}
