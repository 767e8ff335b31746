pub mod errors;
pub mod types;

pub use errors::{ConfigError, ContourError};
pub use types::{Rgb, ThemeMode};

pub type Result<T> = std::result::Result<T, ContourError>;
