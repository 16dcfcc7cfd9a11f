use std::cell::RefCell;
use std::rc::Rc;
use crate::grid::RowAddedHook;
use crate::models::record::RecordKey;

/// Guarda la clave de la última fila agregada a la tabla (callback `rowAdded`)
#[derive(Clone, Default)]
pub struct RowTracker {
    last_added: Rc<RefCell<Option<RecordKey>>>,
}

impl RowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback para `GridConfig::on_row_added`
    pub fn hook(&self) -> RowAddedHook {
        let last_added = self.last_added.clone();
        Rc::new(move |key: &RecordKey| {
            log::debug!("➕ [GRID] Fila agregada: {}", key);
            *last_added.borrow_mut() = Some(key.clone());
        })
    }

    pub fn last_added(&self) -> Option<RecordKey> {
        self.last_added.borrow().clone()
    }
}
