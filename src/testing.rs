// Dobles de prueba para los colaboradores del controlador

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use crate::controller::traits::{EditForm, ModalDialog, Notice, Notifier, TaskSpawner};
use crate::errors::FacadeError;
use crate::models::facade::{Action, FacadeRequest, FacadeResponse};
use crate::models::lookup::LookupList;
use crate::services::api_client::FacadeTransport;

type Reply = Result<FacadeResponse, FacadeError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// Fachada con respuestas programadas por (clase, accion), en orden FIFO
#[derive(Clone, Default)]
pub struct FakeTransport {
    scripts: Rc<RefCell<HashMap<(String, Action), VecDeque<Scripted>>>>,
    requests: Rc<RefCell<Vec<FacadeRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, clase: &str, accion: Action, reply: Reply) {
        self.push(clase, accion, Scripted::Ready(reply));
    }

    /// La respuesta queda retenida hasta que el test la envía por el canal
    pub fn gate(&self, clase: &str, accion: Action) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(clase, accion, Scripted::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<FacadeRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_for(&self, accion: Action) -> Vec<FacadeRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.accion == accion)
            .cloned()
            .collect()
    }

    fn push(&self, clase: &str, accion: Action, scripted: Scripted) {
        self.scripts
            .borrow_mut()
            .entry((clase.to_string(), accion))
            .or_default()
            .push_back(scripted);
    }
}

#[async_trait(?Send)]
impl FacadeTransport for FakeTransport {
    async fn call(&self, request: &FacadeRequest) -> Result<FacadeResponse, FacadeError> {
        self.requests.borrow_mut().push(request.clone());
        let scripted = {
            let mut scripts = self.scripts.borrow_mut();
            scripts
                .get_mut(&(request.clase.clone(), request.accion))
                .and_then(|queue| queue.pop_front())
        };
        match scripted {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(FacadeError::Transport("cancelado".into()))),
            None => Err(FacadeError::Transport(format!(
                "sin respuesta programada para {} / {:?}",
                request.clase, request.accion
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectState {
    pub list: LookupList,
    pub placeholder: String,
    pub selected: Option<String>,
}

/// Formulario en memoria
#[derive(Clone, Default)]
pub struct RecordingForm {
    texts: Rc<RefCell<HashMap<String, String>>>,
    selects: Rc<RefCell<HashMap<String, SelectState>>>,
}

impl RecordingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, field: &str) -> Option<SelectState> {
        self.selects.borrow().get(field).cloned()
    }
}

impl EditForm for RecordingForm {
    fn set_text(&self, field: &str, value: &str) {
        self.texts.borrow_mut().insert(field.to_string(), value.to_string());
    }

    fn text(&self, field: &str) -> String {
        self.texts.borrow().get(field).cloned().unwrap_or_default()
    }

    fn fill_select(&self, field: &str, list: &LookupList, placeholder: &str) {
        self.selects.borrow_mut().insert(
            field.to_string(),
            SelectState {
                list: list.clone(),
                placeholder: placeholder.to_string(),
                selected: None,
            },
        );
    }

    // Como en el DOM: un valor sin opción deja la lista sin selección
    fn select_value(&self, field: &str, value: &str) {
        if let Some(state) = self.selects.borrow_mut().get_mut(field) {
            state.selected = state.list.contains_key(value).then(|| value.to_string());
        }
    }

    fn selected_value(&self, field: &str) -> Option<String> {
        self.selects.borrow().get(field).and_then(|s| s.selected.clone())
    }

    fn selected_label(&self, field: &str) -> Option<String> {
        let selects = self.selects.borrow();
        let state = selects.get(field)?;
        let selected = state.selected.as_ref()?;
        state
            .list
            .items
            .iter()
            .find(|item| &item.key == selected)
            .map(|item| item.label.clone())
    }
}

#[derive(Clone, Default)]
pub struct FakeModal {
    open: Rc<RefCell<bool>>,
    opened: Rc<RefCell<usize>>,
}

impl FakeModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn times_opened(&self) -> usize {
        *self.opened.borrow()
    }
}

impl ModalDialog for FakeModal {
    fn open(&self) {
        *self.open.borrow_mut() = true;
        *self.opened.borrow_mut() += 1;
    }

    fn close(&self) {
        *self.open.borrow_mut() = false;
    }

    fn is_open(&self) -> bool {
        *self.open.borrow()
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn failures(&self) -> Vec<(String, String)> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Failure { detail, context } => Some((detail.clone(), context.clone())),
                Notice::Success => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Spawner sobre un `LocalPool` de futures
pub struct PoolSpawner(pub LocalSpawner);

impl TaskSpawner for PoolSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.0.spawn_local(task).expect("el pool de pruebas sigue vivo");
    }
}
