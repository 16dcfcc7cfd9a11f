// ============================================================================
// TOAST NOTIFIER - Avisos al usuario con M.toast
// ============================================================================

use crate::controller::traits::{Notice, Notifier};
use crate::dom::element::escape_html;
use crate::dom::materialize;

const SUCCESS_CLASSES: &str = "teal darken";
const FAILURE_CLASSES: &str = "red darken-2";

pub struct ToastNotifier;

/// HTML y clases del toast para cada aviso
pub fn toast_content(notice: &Notice) -> (String, &'static str) {
    match notice {
        Notice::Success => (r#"<i class="material-icons">done</i>"#.to_string(), SUCCESS_CLASSES),
        Notice::Failure { detail, context } => (
            format!("{}: {}", escape_html(context), escape_html(detail)),
            FAILURE_CLASSES,
        ),
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        if let Notice::Failure { detail, context } = &notice {
            log::warn!("⚠️ [AVISO] {}: {}", context, detail);
        }
        let (html, classes) = toast_content(&notice);
        if let Err(e) = materialize::toast(&html, classes) {
            log::error!("❌ [AVISO] No se pudo mostrar el toast: {:?}", e);
        }
    }
}
