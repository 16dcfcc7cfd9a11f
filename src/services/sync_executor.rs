// ============================================================================
// SYNC EXECUTOR - insertar / actualizar / eliminar contra la fachada
// ============================================================================
// La tabla se modifica SOLO después de que el servidor responde `ok=true`.
// Si falla, se avisa al usuario y la tabla queda igual. Sin reintentos.
// ============================================================================

use std::rc::Rc;
use crate::controller::traits::{Notice, Notifier};
use crate::errors::{FacadeError, SyncError};
use crate::grid::{GridHandle, RowPosition};
use crate::models::facade::{Action, FacadeRequest, FacadeResponse};
use crate::models::record::{Record, RecordKey};
use crate::services::api_client::FacadeTransport;

/// Campo con la clave original en `actualizar`
pub const CURRENT_KEY_FIELD: &str = "id_actual";

#[derive(Clone)]
pub struct SyncExecutor {
    transport: Rc<dyn FacadeTransport>,
    grid: Rc<dyn GridHandle>,
    notifier: Rc<dyn Notifier>,
    entity: String,
    entity_label: String,
    key_field: String,
    add_row_pos: RowPosition,
}

impl SyncExecutor {
    pub fn new(
        transport: Rc<dyn FacadeTransport>,
        grid: Rc<dyn GridHandle>,
        notifier: Rc<dyn Notifier>,
        entity: &str,
        entity_label: &str,
        key_field: &str,
        add_row_pos: RowPosition,
    ) -> Self {
        Self {
            transport,
            grid,
            notifier,
            entity: entity.to_string(),
            entity_label: entity_label.to_string(),
            key_field: key_field.to_string(),
            add_row_pos,
        }
    }

    /// Inserta `record`. Si el servidor devuelve un objeto en `data` (p. ej. la
    /// clave asignada) se combina con el registro antes de agregar la fila.
    /// Con `{ok: true}` sin datos la fila se agrega sin clave.
    pub async fn insert(&self, record: Record, display: Record) -> Result<Option<RecordKey>, SyncError> {
        let request = FacadeRequest::new(&self.entity, Action::Insertar).with_data(record.clone());

        let data = match self.send(&request).await {
            Ok(data) => data,
            Err(e) => {
                log::error!("❌ [SYNC] Insertar {}: {}", self.entity, e);
                let context = format!("No se pudo insertar el {}", self.entity_label);
                self.notifier.notify(Notice::failure(&e, context));
                return Err(e.into());
            }
        };

        let mut row = record;
        row.merge(&display);
        if let Some(assigned) = data.and_then(Record::from_value) {
            row.merge(&assigned);
        }

        match self.grid.add_row(row, self.add_row_pos) {
            Ok(key) => {
                match &key {
                    Some(key) => log::info!("✅ [SYNC] {} {} insertado", self.entity, key),
                    None => log::info!("✅ [SYNC] {} insertado (sin clave en la respuesta)", self.entity),
                }
                self.notifier.notify(Notice::Success);
                Ok(key)
            }
            Err(e) => {
                log::error!("❌ [SYNC] {} insertado pero no agregado a la tabla: {}", self.entity, e);
                self.notifier.notify(Notice::Failure {
                    detail: e.to_string(),
                    context: format!("El {} se guardó pero no se pudo mostrar en la tabla", self.entity_label),
                });
                Err(e.into())
            }
        }
    }

    /// Actualiza la fila `key`. La fila se sigue direccionando por la clave original:
    /// el parche no incluye ni `id_actual` ni el campo clave.
    pub async fn update(&self, key: RecordKey, record: Record, display: Record) -> Result<(), SyncError> {
        let mut data = record.clone();
        data.set(CURRENT_KEY_FIELD, key.to_value());
        let request = FacadeRequest::new(&self.entity, Action::Actualizar).with_data(data);

        if let Err(e) = self.send(&request).await {
            log::error!("❌ [SYNC] Actualizar {} {}: {}", self.entity, key, e);
            let context = format!("No se pudo actualizar el {} con ID {}", self.entity_label, key);
            self.notifier.notify(Notice::failure(&e, context));
            return Err(e.into());
        }

        let mut patch = record.without(&[CURRENT_KEY_FIELD, self.key_field.as_str()]);
        patch.merge(&display);

        match self.grid.update_row_by_key(&key, &patch) {
            Ok(()) => {
                log::info!("✅ [SYNC] {} {} actualizado", self.entity, key);
                self.notifier.notify(Notice::Success);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [SYNC] {} {} actualizado pero la fila no existe: {}", self.entity, key, e);
                self.notifier.notify(Notice::Failure {
                    detail: e.to_string(),
                    context: format!("El {} con ID {} se guardó pero no se pudo refrescar la tabla", self.entity_label, key),
                });
                Err(e.into())
            }
        }
    }

    pub async fn delete(&self, key: RecordKey) -> Result<(), SyncError> {
        let request = FacadeRequest::new(&self.entity, Action::Eliminar).with_key(&self.key_field, &key);

        if let Err(e) = self.send(&request).await {
            log::error!("❌ [SYNC] Eliminar {} {}: {}", self.entity, key, e);
            let context = format!("No se pudo eliminar el {} con ID {}", self.entity_label, key);
            self.notifier.notify(Notice::failure(&e, context));
            return Err(e.into());
        }

        match self.grid.delete_row(&key) {
            Ok(()) => {
                log::info!("🗑️ [SYNC] {} {} eliminado", self.entity, key);
                self.notifier.notify(Notice::Success);
                Ok(())
            }
            Err(e) => {
                // La fila ya no está: el resultado visible es el esperado
                log::warn!("⚠️ [SYNC] {} {} eliminado, fila ausente en la tabla: {}", self.entity, key, e);
                self.notifier.notify(Notice::Success);
                Err(e.into())
            }
        }
    }

    async fn send(&self, request: &FacadeRequest) -> Result<Option<serde_json::Value>, FacadeError> {
        self.transport
            .call(request)
            .await
            .and_then(FacadeResponse::into_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GridError;
    use crate::grid::{GridConfig, MemoryGrid};
    use crate::testing::{FakeTransport, RecordingNotifier};
    use futures::executor::block_on;
    use serde_json::{json, Value};

    struct Fixture {
        transport: FakeTransport,
        grid: MemoryGrid,
        notifier: RecordingNotifier,
        executor: SyncExecutor,
    }

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    fn fixture() -> Fixture {
        let transport = FakeTransport::new();
        let grid = MemoryGrid::initialize(&GridConfig::new("#t", "/f", "Producto", "id_producto"));
        grid.load(vec![record(json!({"id_producto": 7, "nombre": "Widget", "precio": 9.99}))]);
        let notifier = RecordingNotifier::new();
        let executor = SyncExecutor::new(
            Rc::new(transport.clone()),
            Rc::new(grid.clone()),
            Rc::new(notifier.clone()),
            "Producto",
            "producto",
            "id_producto",
            RowPosition::Top,
        );
        Fixture { transport, grid, notifier, executor }
    }

    #[test]
    fn insert_merges_server_assigned_key() {
        let f = fixture();
        f.transport.respond(
            "Producto",
            Action::Insertar,
            Ok(FacadeResponse::ok(Some(json!({"id_producto": 8})))),
        );

        let key = block_on(f.executor.insert(
            record(json!({"nombre": "Tuerca", "precio": 1.5})),
            record(json!({"categoria": "Herramientas"})),
        ))
        .unwrap();

        assert_eq!(key, Some(RecordKey::Int(8)));
        let top = &f.grid.rows()[0];
        assert_eq!(top.text("nombre"), "Tuerca");
        assert_eq!(top.text("categoria"), "Herramientas");
        assert_eq!(f.notifier.notices(), vec![Notice::Success]);

        let sent = &f.transport.requests()[0];
        assert_eq!(sent.data, Some(json!({"nombre": "Tuerca", "precio": 1.5})));
    }

    #[test]
    fn bare_ok_insert_adds_row_and_reports_success() {
        let f = fixture();
        f.transport.respond("Producto", Action::Insertar, Ok(FacadeResponse::ok(None)));

        let key = block_on(f.executor.insert(record(json!({"nombre": "Tuerca"})), Record::new())).unwrap();

        assert_eq!(key, None);
        assert_eq!(f.grid.len(), 2);
        assert_eq!(f.grid.rows()[0].text("nombre"), "Tuerca");
        assert_eq!(f.notifier.notices(), vec![Notice::Success]);
    }

    #[test]
    fn insert_with_existing_key_is_saved_but_not_shown() {
        let f = fixture();
        f.transport.respond(
            "Producto",
            Action::Insertar,
            Ok(FacadeResponse::ok(Some(json!({"id_producto": 7})))),
        );

        let err = block_on(f.executor.insert(record(json!({"nombre": "Tuerca"})), Record::new())).unwrap_err();

        assert!(matches!(err, SyncError::Grid(GridError::DuplicateKey(_))));
        assert!(err.was_saved());
        assert_eq!(f.grid.len(), 1);
        assert!(matches!(f.notifier.notices()[0], Notice::Failure { .. }));
    }

    #[test]
    fn update_sends_current_key_and_patches_original_row() {
        let f = fixture();
        f.transport.respond("Producto", Action::Actualizar, Ok(FacadeResponse::ok(None)));

        block_on(f.executor.update(
            RecordKey::Int(7),
            record(json!({"id_producto": 70, "precio": 12.5})),
            Record::new(),
        ))
        .unwrap();

        let sent = &f.transport.requests()[0];
        assert_eq!(sent.data, Some(json!({"id_producto": 70, "precio": 12.5, "id_actual": 7})));

        assert_eq!(f.grid.len(), 1);
        let row = f.grid.get_row_data(&RecordKey::Int(7)).unwrap();
        assert_eq!(row.get("precio"), Some(&json!(12.5)));
        assert!(f.grid.get_row_data(&RecordKey::Int(70)).is_none());
    }

    #[test]
    fn failed_delete_keeps_row_and_names_the_key() {
        let f = fixture();
        f.transport.respond(
            "Producto",
            Action::Eliminar,
            Err(FacadeError::Transport("HTTP 500: Internal Server Error".into())),
        );

        let err = block_on(f.executor.delete(RecordKey::Int(7))).unwrap_err();

        assert!(matches!(err, SyncError::Facade(FacadeError::Transport(_))));
        assert_eq!(f.grid.len(), 1);
        match &f.notifier.notices()[0] {
            Notice::Failure { context, .. } => assert!(context.contains("ID 7")),
            other => panic!("se esperaba un fallo, se obtuvo {:?}", other),
        }
        assert_eq!(
            serde_json::to_value(&f.transport.requests()[0]).unwrap(),
            json!({"clase": "Producto", "accion": "eliminar", "id_producto": 7})
        );
    }
}
