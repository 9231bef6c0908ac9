mod catalog;
mod error;
mod palette;

pub use catalog::{resolve_theme, ThemeCatalog, ThemeEntry, DEFAULT_THEME};
pub use error::{Result, ThemeError};
pub use palette::{ThemePalette, CYBERPUNK, DARK, LIGHT, METALLIC, NATURE, RETRO, SEASONAL};
