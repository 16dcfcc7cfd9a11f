use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Claves que `AppConfig::from_env` lee con `option_env!`
const CONFIG_KEYS: [&str; 5] = ["FACHADA_URL", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL", "PAGE_SIZE"];

fn read_dotenv(path: &Path) -> HashMap<String, String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return HashMap::new();
    };
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().trim_matches('"').to_string()))
        .collect()
}

fn main() {
    let env_file = Path::new(".env");
    let dotenv = read_dotenv(env_file);

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        for key in dotenv.keys().filter(|k| !CONFIG_KEYS.contains(&k.as_str())) {
            println!("cargo:warning=.env: clave desconocida {}", key);
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        // El entorno de compilación tiene prioridad sobre .env
        if env::var(key).is_err() {
            if let Some(value) = dotenv.get(key) {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}
