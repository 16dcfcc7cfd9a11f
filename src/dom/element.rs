// ============================================================================
// ELEMENT HELPERS - Acceso a elementos del DOM por id
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento obligatorio: error si no está en la página
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No existe el elemento #{}", id)))
}

pub fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

pub fn select_by_id(id: &str) -> Option<HtmlSelectElement> {
    get_element_by_id(id)?.dyn_into::<HtmlSelectElement>().ok()
}

/// Crear `<option>` con valor y texto
pub fn create_option(value: &str, text: &str) -> Result<HtmlOptionElement, JsValue> {
    let option = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .create_element("option")?
        .dyn_into::<HtmlOptionElement>()
        .map_err(|_| JsValue::from_str("option no es un HtmlOptionElement"))?;
    option.set_value(value);
    option.set_text(text);
    Ok(option)
}

/// Escapa texto para insertarlo como HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
