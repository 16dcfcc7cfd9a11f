use futures::future::LocalBoxFuture;
use crate::errors::FacadeError;
use crate::models::lookup::LookupList;

/// Formulario de edición, direccionado por nombre de campo del registro
pub trait EditForm {
    fn set_text(&self, field: &str, value: &str);

    fn text(&self, field: &str) -> String;

    /// Reemplaza las opciones de la lista desplegable, con `placeholder` primero
    fn fill_select(&self, field: &str, list: &LookupList, placeholder: &str);

    fn select_value(&self, field: &str, value: &str);

    /// Valor seleccionado; `None` si está en el placeholder o vacío
    fn selected_value(&self, field: &str) -> Option<String>;

    fn selected_label(&self, field: &str) -> Option<String>;

    /// Refresca etiquetas/estilos tras escribir valores desde código
    fn refresh(&self) {}
}

/// Diálogo modal (no se cierra al hacer click fuera)
pub trait ModalDialog {
    fn open(&self);
    fn close(&self);
    fn is_open(&self) -> bool;
}

/// Aviso al usuario
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success,
    Failure { detail: String, context: String },
}

impl Notice {
    pub fn failure(error: &FacadeError, context: impl Into<String>) -> Self {
        Notice::Failure {
            detail: error.to_string(),
            context: context.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Lanza tareas en el hilo (único) de la aplicación
pub trait TaskSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Spawner del navegador
pub struct BrowserSpawner;

impl TaskSpawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
