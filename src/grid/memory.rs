// ============================================================================
// MEMORY GRID - Tabla en memoria con el mismo contrato que Tabulator
// ============================================================================

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;
use serde_json::Value;
use crate::errors::GridError;
use crate::grid::{GridConfig, GridHandle, RowAddedHook, RowPosition, SortDir, SortSpec};
use crate::models::record::{Record, RecordKey};

#[derive(Clone)]
pub struct MemoryGrid {
    rows: Rc<RefCell<Vec<Record>>>,
    index: String,
    page_size: usize,
    initial_sort: Vec<SortSpec>,
    on_row_added: Option<RowAddedHook>,
}

impl MemoryGrid {
    pub fn initialize(config: &GridConfig) -> Self {
        log::info!("📋 [GRID] Tabla en memoria '{}' (índice: {})", config.container, config.index);
        Self {
            rows: Rc::new(RefCell::new(Vec::new())),
            index: config.index.clone(),
            page_size: config.page_size.max(1),
            initial_sort: config.initial_sort.clone(),
            on_row_added: config.on_row_added.clone(),
        }
    }

    /// Carga inicial de datos, ordenada según `initial_sort`.
    /// Las filas sin clave se descartan.
    pub fn load(&self, records: Vec<Record>) {
        let mut rows: Vec<Record> = records
            .into_iter()
            .filter(|r| {
                let has_key = r.key(&self.index).is_some();
                if !has_key {
                    log::warn!("⚠️ [GRID] Fila sin clave '{}' descartada", self.index);
                }
                has_key
            })
            .collect();
        let sorters = &self.initial_sort;
        rows.sort_by(|a, b| compare_rows(a, b, sorters));
        *self.rows.borrow_mut() = rows;
    }

    pub fn rows(&self) -> Vec<Record> {
        self.rows.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    pub fn page_count(&self) -> usize {
        let len = self.len();
        if len == 0 {
            1
        } else {
            len.div_ceil(self.page_size)
        }
    }

    /// Página 1-based
    pub fn page(&self, page: usize) -> Vec<Record> {
        let start = page.saturating_sub(1) * self.page_size;
        self.rows
            .borrow()
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    fn position_of(&self, key: &RecordKey) -> Option<usize> {
        self.rows
            .borrow()
            .iter()
            .position(|r| r.key(&self.index).as_ref() == Some(key))
    }
}

impl GridHandle for MemoryGrid {
    fn add_row(&self, record: Record, position: RowPosition) -> Result<Option<RecordKey>, GridError> {
        let key = record.key(&self.index);
        if let Some(key) = &key {
            if self.position_of(key).is_some() {
                return Err(GridError::DuplicateKey(key.clone()));
            }
        } else {
            log::warn!("⚠️ [GRID] Fila agregada sin clave '{}'", self.index);
        }
        {
            let mut rows = self.rows.borrow_mut();
            match position {
                RowPosition::Top => rows.insert(0, record),
                RowPosition::Bottom => rows.push(record),
            }
        }
        if let (Some(hook), Some(key)) = (&self.on_row_added, &key) {
            hook(key);
        }
        Ok(key)
    }

    fn update_row_by_key(&self, key: &RecordKey, patch: &Record) -> Result<(), GridError> {
        let idx = self
            .position_of(key)
            .ok_or_else(|| GridError::RowNotFound(key.clone()))?;
        self.rows.borrow_mut()[idx].merge(patch);
        Ok(())
    }

    fn delete_row(&self, key: &RecordKey) -> Result<(), GridError> {
        let idx = self
            .position_of(key)
            .ok_or_else(|| GridError::RowNotFound(key.clone()))?;
        self.rows.borrow_mut().remove(idx);
        Ok(())
    }

    fn get_row_data(&self, key: &RecordKey) -> Option<Record> {
        let idx = self.position_of(key)?;
        self.rows.borrow().get(idx).cloned()
    }
}

fn compare_rows(a: &Record, b: &Record, sorters: &[SortSpec]) -> Ordering {
    for sorter in sorters {
        let ordering = compare_values(a.get(&sorter.column), b.get(&sorter.column));
        let ordering = match sorter.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

// Nulos primero, números por valor, el resto como texto
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
