use crate::models::record::RecordKey;

/// Intención seleccionada por el último click de control o por "agregar"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    None,
    Insert,
    Update,
    Delete,
}

/// Sesión de edición. La fila activa se referencia por su clave y se
/// resuelve contra la tabla en el momento de usarla.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Insert,
    Update { key: RecordKey },
    Delete { key: RecordKey },
}

impl EditSession {
    pub fn operation(&self) -> Operation {
        match self {
            EditSession::Idle => Operation::None,
            EditSession::Insert => Operation::Insert,
            EditSession::Update { .. } => Operation::Update,
            EditSession::Delete { .. } => Operation::Delete,
        }
    }

    pub fn active_key(&self) -> Option<&RecordKey> {
        match self {
            EditSession::Update { key } | EditSession::Delete { key } => Some(key),
            EditSession::Idle | EditSession::Insert => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }
}
