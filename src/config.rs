use serde::{Deserialize, Serialize};

/// Configuración de la aplicación, resuelta en tiempo de compilación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub fachada_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fachada_url: "./controlador/fachada.php".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            page_size: 7,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fachada_url: option_env!("FACHADA_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.fachada_url),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(|s| s.to_lowercase())
                .unwrap_or(defaults.log_level),
            page_size: option_env!("PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log efectivo; un nivel desconocido cae a Warn en producción
    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ if self.is_production() => log::Level::Warn,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
