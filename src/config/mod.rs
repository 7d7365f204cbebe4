pub mod settings;

pub use settings::{Settings, DEFAULT_MAX_FILE_CHARS};
