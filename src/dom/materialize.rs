// ============================================================================
// MATERIALIZE - Bindings mínimos a Materialize CSS (M.*)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["M", "Modal"], js_name = init)]
    fn modal_init(element: &Element, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = ["M", "FormSelect"], js_name = init)]
    fn form_select_init(element: &Element, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = M, js_name = updateTextFields)]
    fn update_text_fields_js();

    #[wasm_bindgen(js_namespace = M, js_name = toast)]
    fn toast_js(options: &JsValue);
}

/// Inicializa `element` como modal no descartable y devuelve la instancia
pub fn init_modal(element: &Element) -> Result<JsValue, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"dismissible".into(), &JsValue::FALSE)?;
    Ok(modal_init(element, &options))
}

/// Reconstruye el select visual de Materialize tras cambiar opciones o valor
pub fn init_select(element: &Element) {
    form_select_init(element, &js_sys::Object::new());
}

/// Reacomoda las etiquetas de los inputs con valor escrito desde código
pub fn update_text_fields() {
    update_text_fields_js();
}

pub fn toast(html: &str, classes: &str) -> Result<(), JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"html".into(), &html.into())?;
    js_sys::Reflect::set(&options, &"classes".into(), &classes.into())?;
    toast_js(&options);
    Ok(())
}
