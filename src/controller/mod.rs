// ============================================================================
// RECORD TABLE CONTROLLER - Sesión de edición sobre la tabla remota
// ============================================================================
// - editar: abre el modal, llena los textos al instante y carga las listas
//   de referencia en paralelo (cada una por su cuenta)
// - eliminar: inmediato, sin modal
// - aceptar/cancelar: cierra el modal y vuelve a Idle sin esperar al servidor
// ============================================================================

pub mod form;
pub mod traits;

use std::rc::Rc;
use futures::FutureExt;
use crate::grid::{ControlTarget, GridHandle};
use crate::models::record::{Record, RecordKey};
use crate::models::session::{EditSession, Operation};
use crate::services::api_client::FacadeTransport;
use crate::services::lookup_loader::ReferenceDataLoader;
use crate::services::sync_executor::SyncExecutor;
use crate::state::{Generation, RowTracker, SessionState};
use crate::tables::TableDefinition;
use self::form::FormValues;
use self::traits::{EditForm, ModalDialog, Notice, Notifier, TaskSpawner};

/// Colaboradores externos del controlador
#[derive(Clone)]
pub struct Collaborators {
    pub transport: Rc<dyn FacadeTransport>,
    pub grid: Rc<dyn GridHandle>,
    pub form: Rc<dyn EditForm>,
    pub modal: Rc<dyn ModalDialog>,
    pub notifier: Rc<dyn Notifier>,
    pub spawner: Rc<dyn TaskSpawner>,
}

/// Escritura pendiente tomada del formulario al aceptar
enum PendingWrite {
    Insert(FormValues),
    Update(RecordKey, FormValues),
}

#[derive(Clone)]
pub struct RecordTableController {
    table: Rc<TableDefinition>,
    session: SessionState,
    rows: RowTracker,
    loader: ReferenceDataLoader,
    executor: SyncExecutor,
    grid: Rc<dyn GridHandle>,
    form: Rc<dyn EditForm>,
    modal: Rc<dyn ModalDialog>,
    notifier: Rc<dyn Notifier>,
    spawner: Rc<dyn TaskSpawner>,
}

impl RecordTableController {
    pub fn new(table: TableDefinition, collaborators: Collaborators, rows: RowTracker) -> Self {
        let executor = SyncExecutor::new(
            collaborators.transport.clone(),
            collaborators.grid.clone(),
            collaborators.notifier.clone(),
            &table.entity,
            &table.entity_label,
            &table.key_field,
            table.add_row_pos,
        );
        Self {
            table: Rc::new(table),
            session: SessionState::new(),
            rows,
            loader: ReferenceDataLoader::new(collaborators.transport),
            executor,
            grid: collaborators.grid,
            form: collaborators.form,
            modal: collaborators.modal,
            notifier: collaborators.notifier,
            spawner: collaborators.spawner,
        }
    }

    pub fn session(&self) -> EditSession {
        self.session.current()
    }

    pub fn operation(&self) -> Operation {
        self.session.operation()
    }

    pub fn active_key(&self) -> Option<RecordKey> {
        self.session.active_key()
    }

    /// Clave de la última fila agregada a la tabla
    pub fn last_added_key(&self) -> Option<RecordKey> {
        self.rows.last_added()
    }

    /// Click en un botón de la columna de control
    pub fn handle_control_click(&self, target: ControlTarget, key: RecordKey) {
        let handler = Self::control_handler(target);
        handler(self, key);
    }

    fn control_handler(target: ControlTarget) -> fn(&Self, RecordKey) {
        match target {
            ControlTarget::Edit => Self::edit_record,
            ControlTarget::Delete => Self::delete_record,
        }
    }

    /// Abre el formulario sobre la fila `key`
    pub fn edit_record(&self, key: RecordKey) {
        let Some(row) = self.grid.get_row_data(&key) else {
            log::error!("❌ [SESION] No existe la fila {} para editar", key);
            self.notifier.notify(Notice::Failure {
                detail: format!("No existe la fila con ID {}", key),
                context: format!("No se pudo editar el {}", self.table.entity_label),
            });
            return;
        };

        let generation = self.session.begin(EditSession::Update { key: key.clone() });
        log::info!("✏️ [SESION] Editando {} {} (generación {})", self.table.entity, key, generation);

        self.modal.open();
        self.table.form.populate(self.form.as_ref(), &row);
        self.spawn_lookups(generation, Some(&row));
    }

    /// Elimina la fila `key` sin pasar por el modal
    pub fn delete_record(&self, key: RecordKey) {
        self.session.begin(EditSession::Delete { key: key.clone() });
        log::info!("🗑️ [SESION] Eliminando {} {}", self.table.entity, key);

        let executor = self.executor.clone();
        self.spawner.spawn(
            async move {
                let _ = executor.delete(key).await;
            }
            .boxed_local(),
        );

        self.session.reset();
    }

    /// Botón "agregar": formulario vacío
    pub fn add_record(&self) {
        let generation = self.session.begin(EditSession::Insert);
        log::info!("➕ [SESION] Nuevo {} (generación {})", self.table.entity, generation);

        self.table.form.clear(self.form.as_ref());
        self.modal.open();
        self.spawn_lookups(generation, None);
    }

    /// Botón "aceptar" del modal
    pub fn confirm(&self) {
        let pending = match self.session.current() {
            EditSession::Insert => Some(PendingWrite::Insert(self.read_form())),
            EditSession::Update { key } => Some(PendingWrite::Update(key, self.read_form())),
            EditSession::Delete { .. } | EditSession::Idle => {
                log::warn!("⚠️ [SESION] Aceptar sin inserción ni actualización pendiente");
                None
            }
        };

        self.modal.close();
        let generation = self.session.reset();

        match pending {
            Some(PendingWrite::Insert(values)) => self.spawn_insert(values, generation),
            Some(PendingWrite::Update(key, values)) => {
                let executor = self.executor.clone();
                self.spawner.spawn(
                    async move {
                        let _ = executor.update(key, values.data, values.display).await;
                    }
                    .boxed_local(),
                );
            }
            None => {}
        }
    }

    /// Botón "cancelar" del modal
    pub fn cancel(&self) {
        log::debug!("↩️ [SESION] Edición cancelada ({:?})", self.session.operation());
        self.modal.close();
        self.session.reset();
    }

    fn read_form(&self) -> FormValues {
        self.table.form.read(self.form.as_ref(), &self.table.key_field)
    }

    // Si el servidor guardó el registro el formulario se limpia, aunque la tabla no
    // lo haya podido mostrar, salvo que ya se haya abierto otra sesión
    fn spawn_insert(&self, values: FormValues, generation: Generation) {
        let executor = self.executor.clone();
        let session = self.session.clone();
        let form = self.form.clone();
        let table = self.table.clone();
        self.spawner.spawn(
            async move {
                let saved = match executor.insert(values.data, values.display).await {
                    Ok(_) => true,
                    Err(e) => e.was_saved(),
                };
                if saved && session.is_current(generation) {
                    table.form.clear(form.as_ref());
                }
            }
            .boxed_local(),
        );
    }

    /// Una tarea por lista; cada una aplica su resultado solo si la sesión sigue vigente
    fn spawn_lookups(&self, generation: Generation, row: Option<&Record>) {
        for select in &self.table.form.selects {
            let spec = select.lookup.clone();
            let preselect = row.map(|r| r.text(&spec.field)).filter(|v| !v.is_empty());
            let loader = self.loader.clone();
            let session = self.session.clone();
            let form = self.form.clone();
            let notifier = self.notifier.clone();

            self.spawner.spawn(
                async move {
                    let result = loader.load_lookup(&spec).await;

                    if !session.is_current(generation) {
                        log::debug!(
                            "⏭️ [LOOKUP] {} descartada: la sesión {} ya no está activa",
                            spec.entity,
                            generation
                        );
                        return;
                    }

                    match result {
                        Ok(list) => {
                            form.fill_select(&spec.field, &list, &spec.placeholder);
                            if let Some(value) = preselect {
                                if !list.contains_key(&value) {
                                    log::warn!("⚠️ [LOOKUP] {} no contiene el valor {}", spec.entity, value);
                                }
                                form.select_value(&spec.field, &value);
                            }
                        }
                        Err(e) => {
                            log::error!("❌ [LOOKUP] {}: {}", spec.entity, e);
                            notifier.notify(Notice::failure(&e, format!("No se pudo cargar la lista de {}", spec.entity)));
                        }
                    }
                }
                .boxed_local(),
            );
        }
    }
}
