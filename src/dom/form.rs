// ============================================================================
// DOM FORM - Formulario de edición sobre inputs y selects de Materialize
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlSelectElement};
use crate::controller::form::FormLayout;
use crate::controller::traits::EditForm;
use crate::dom::element::{create_option, input_by_id, select_by_id};
use crate::dom::materialize;
use crate::models::lookup::LookupList;

/// Resuelve cada campo del registro al elemento declarado en el `FormLayout`
pub struct DomForm {
    layout: FormLayout,
}

impl DomForm {
    pub fn new(layout: FormLayout) -> Self {
        Self { layout }
    }

    fn element_id(&self, field: &str) -> Option<&str> {
        let id = self.layout.element_id(field);
        if id.is_none() {
            log::warn!("⚠️ [FORM] Campo '{}' sin elemento en el formulario", field);
        }
        id
    }

    fn select(&self, field: &str) -> Option<HtmlSelectElement> {
        let id = self.element_id(field)?;
        let select = select_by_id(id);
        if select.is_none() {
            log::warn!("⚠️ [FORM] #{} no es un select", id);
        }
        select
    }

    fn fill_options(select: &HtmlSelectElement, list: &LookupList, placeholder: &str) -> Result<(), JsValue> {
        select.set_inner_html("");

        let first = create_option("", placeholder)?;
        first.set_disabled(true);
        first.set_selected(true);
        select.append_child(&first)?;

        for item in &list.items {
            let option = create_option(&item.key, &item.label)?;
            select.append_child(&option)?;
        }
        Ok(())
    }
}

impl EditForm for DomForm {
    fn set_text(&self, field: &str, value: &str) {
        if let Some(input) = self.element_id(field).and_then(input_by_id) {
            input.set_value(value);
        }
    }

    fn text(&self, field: &str) -> String {
        self.element_id(field)
            .and_then(input_by_id)
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn fill_select(&self, field: &str, list: &LookupList, placeholder: &str) {
        let Some(select) = self.select(field) else { return };
        if let Err(e) = Self::fill_options(&select, list, placeholder) {
            log::error!("❌ [FORM] No se pudo llenar {}: {:?}", field, e);
            return;
        }
        materialize::init_select(select.as_ref());
    }

    fn select_value(&self, field: &str, value: &str) {
        let Some(select) = self.select(field) else { return };
        select.set_value(value);
        materialize::init_select(select.as_ref());
    }

    fn selected_value(&self, field: &str) -> Option<String> {
        let value = self.select(field)?.value();
        (!value.is_empty()).then_some(value)
    }

    fn selected_label(&self, field: &str) -> Option<String> {
        let select = self.select(field)?;
        let index = u32::try_from(select.selected_index()).ok()?;
        let option: Element = select.item(index)?;
        option.text_content()
    }

    fn refresh(&self) {
        materialize::update_text_fields();
    }
}
