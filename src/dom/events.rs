// ============================================================================
// EVENT HANDLING - Listeners de click
// ============================================================================
// Los listeners de la página se registran una sola vez al inicio, por eso
// closure.forget() no acumula closures.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use crate::dom::element::require_element;

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

/// Click en el elemento `#id`; evita el submit/navegación por defecto
pub fn on_click_id<F>(id: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let element = require_element(id)?;
    on_click(&element, move |event: MouseEvent| {
        event.prevent_default();
        handler();
    })
}
