// ============================================================================
// SESSION STATE - Sesión de edición activa + contador de generación
// ============================================================================
// Cada transición incrementa la generación. Las respuestas asíncronas llevan
// la generación con la que se emitieron y solo se aplican si sigue vigente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::record::RecordKey;
use crate::models::session::{EditSession, Operation};

/// Token de generación de una sesión
pub type Generation = u64;

/// Estado de la sesión de edición (compartido entre handlers)
#[derive(Clone, Default)]
pub struct SessionState {
    session: Rc<RefCell<EditSession>>,
    generation: Rc<RefCell<Generation>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza incondicionalmente la sesión actual y devuelve la nueva generación
    pub fn begin(&self, session: EditSession) -> Generation {
        let previous = self.session.replace(session.clone());
        if !previous.is_idle() {
            log::debug!("🔁 [SESION] {:?} reemplazada por {:?}", previous, session);
        }
        self.bump()
    }

    /// Vuelve a `Idle`; invalida las cargas pendientes de la sesión anterior
    pub fn reset(&self) -> Generation {
        *self.session.borrow_mut() = EditSession::Idle;
        self.bump()
    }

    pub fn current(&self) -> EditSession {
        self.session.borrow().clone()
    }

    pub fn operation(&self) -> Operation {
        self.session.borrow().operation()
    }

    pub fn active_key(&self) -> Option<RecordKey> {
        self.session.borrow().active_key().cloned()
    }

    pub fn generation(&self) -> Generation {
        *self.generation.borrow()
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation() == generation
    }

    fn bump(&self) -> Generation {
        let mut generation = self.generation.borrow_mut();
        *generation += 1;
        *generation
    }
}
