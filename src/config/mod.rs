//! Doc
mod loader;
mod types;

pub use loader::load_or_default;
pub use types::{
    ConfigError,
    GeneratorSettings,
    ValidationError,
};
