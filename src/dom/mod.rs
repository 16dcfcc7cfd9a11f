// ============================================================================
// DOM MODULE - Colaboradores del navegador (formulario, modal, avisos)
// ============================================================================

pub mod element;
pub mod events;
pub mod form;
pub mod materialize;
pub mod modal;
pub mod notifier;

pub use form::DomForm;
pub use modal::MaterializeModal;
pub use notifier::ToastNotifier;
