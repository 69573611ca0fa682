use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment-sourced configuration. Every value has a documented
/// default except the API credential, which `validate()` enforces.
///
/// Chunk size and overlap are deliberately not range-checked; the
/// splitter logs a warning for `overlap >= size` instead.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub chunking: ChunkingSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Root directory holding one SQLite file per collection.
    pub root_path: PathBuf,
    pub default_collection: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    /// Reads all settings from the environment, applying defaults for
    /// anything unset. Malformed numeric values fail fast.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0".to_string())?,
                port: env_or("SERVER_PORT", 3000u16)?,
            },
            openai: OpenAiSettings {
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                embedding_model: env_or("EMBEDDING_MODEL", "text-embedding-ada-002".to_string())?,
                chat_model: env_or("CHAT_MODEL", "gpt-3.5-turbo".to_string())?,
                max_tokens: env_or("MAX_TOKENS", 500u32)?,
                temperature: env_or("TEMPERATURE", 0.7f32)?,
            },
            chunking: ChunkingSettings {
                chunk_size: env_or("CHUNK_SIZE", 1000usize)?,
                chunk_overlap: env_or("CHUNK_OVERLAP", 200usize)?,
            },
            storage: StorageSettings {
                root_path: PathBuf::from(env_or(
                    "VECTOR_STORE_PATH",
                    "./vector_store".to_string(),
                )?),
                default_collection: env_or("DEFAULT_COLLECTION", "documents".to_string())?,
            },
            logging: LoggingSettings {
                json_format: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }

    /// Fails with a configuration error when the API credential is
    /// missing. Every handler that reaches a remote service calls this
    /// before doing any work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openai.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
            reason: format!("{e}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors are a distinct kind from processing errors so the
/// caller can point the user at credential setup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set; add it to your environment or .env file")]
    MissingApiKey,
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
