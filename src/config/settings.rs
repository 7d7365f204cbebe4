use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};

use ia_service::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

/// Limite padrão de caracteres do arquivo enviados ao modelo
pub const DEFAULT_MAX_FILE_CHARS: usize = 5000;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub limits: LimitsSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,  // Limite do corpo multipart em /analyze-file
}

#[derive(Serialize, Deserialize, Clone)]
pub struct GeminiSettings {
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LimitsSettings {
    pub max_file_chars: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECONDS,
        }
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key_configured", &self.has_api_key())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl GeminiSettings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            max_file_chars: DEFAULT_MAX_FILE_CHARS,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Valores padrão (o servidor sobe mesmo sem arquivos de configuração)
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT as i64)?
            .set_default("server.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES as i64)?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.model", DEFAULT_GEMINI_MODEL)?
            .set_default("gemini.base_url", DEFAULT_GEMINI_BASE_URL)?
            .set_default("gemini.timeout_seconds", DEFAULT_TIMEOUT_SECONDS as i64)?
            .set_default("gemini.connect_timeout_seconds", DEFAULT_CONNECT_TIMEOUT_SECONDS as i64)?
            .set_default("limits.max_file_chars", DEFAULT_MAX_FILE_CHARS as i64)?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // AUTOU__GEMINI__MODEL, AUTOU__SERVER__PORT, ...
            .add_source(
                Environment::with_prefix("AUTOU")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // Variáveis de ambiente específicas
        if let Ok(api_key) = std::env::var("GOOGLE_API_KEY") {
            builder = builder.set_override("gemini.api_key", api_key)?;
        }
        // No Render/Cloud Run a porta vem em PORT
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            builder = builder.set_override("server.port", port as i64)?;
        }

        let s = builder.build()?;

        s.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
