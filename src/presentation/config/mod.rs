mod settings;

pub use settings::{
    ChunkingSettings, ConfigError, LoggingSettings, OpenAiSettings, ServerSettings, Settings,
    StorageSettings,
};
