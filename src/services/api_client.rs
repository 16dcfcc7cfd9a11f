// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP con la fachada (Stateless)
// ============================================================================
// NO tiene lógica de negocio: envía `{clase, accion, ...}` por POST y devuelve
// `{ok, mensaje?, data?}` tal cual
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::errors::FacadeError;
use crate::models::facade::{FacadeRequest, FacadeResponse};

/// Transporte hacia el controlador de fachada
#[async_trait(?Send)]
pub trait FacadeTransport {
    async fn call(&self, request: &FacadeRequest) -> Result<FacadeResponse, FacadeError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_url(&CONFIG.fachada_url)
    }

    pub fn with_url(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl FacadeTransport for ApiClient {
    async fn call(&self, request: &FacadeRequest) -> Result<FacadeResponse, FacadeError> {
        log::debug!("📤 [API] {} / {:?}", request.clase, request.accion);

        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| FacadeError::Decode(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| FacadeError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FacadeError::Transport(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<FacadeResponse>()
            .await
            .map_err(|e| FacadeError::Decode(e.to_string()))
    }
}
