use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::error::{Result, ThemeError};
use super::palette::{ThemePalette, CYBERPUNK, DARK, LIGHT, METALLIC, NATURE, RETRO, SEASONAL};

/// Name of the fallback theme.
pub const DEFAULT_THEME: &str = "light";

static BUILTIN: OnceLock<ThemeCatalog> = OnceLock::new();

static FALLBACK: ThemePalette = LIGHT;

/// A theme is either one palette or one palette per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeEntry {
    Static(ThemePalette),
    Monthly(Box<[ThemePalette; 12]>),
}

/// On-disk shape of a custom catalog.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "static")]
    static_themes: BTreeMap<String, ThemePalette>,
    #[serde(default)]
    monthly: BTreeMap<String, Vec<ThemePalette>>,
}

/// Mapping from theme name to palette(s).
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: BTreeMap<String, ThemeEntry>,
}

impl ThemeCatalog {
    /// Creates an empty catalog. Resolution still falls back to the
    /// built-in light palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide catalog of the built-in themes.
    pub fn builtin() -> &'static ThemeCatalog {
        BUILTIN.get_or_init(Self::with_builtin)
    }

    /// Owned copy of the built-in themes, for extending with custom ones.
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert_static(DEFAULT_THEME, LIGHT);
        catalog.insert_static("dark", DARK);
        catalog.insert_static("metallic", METALLIC);
        catalog.insert_static("cyberpunk", CYBERPUNK);
        catalog.insert_static("retro", RETRO);
        catalog.insert_static("nature", NATURE);
        catalog.insert_monthly("seasonal", SEASONAL);
        catalog
    }

    pub fn insert_static(&mut self, name: impl Into<String>, palette: ThemePalette) {
        self.themes.insert(name.into(), ThemeEntry::Static(palette));
    }

    pub fn insert_monthly(&mut self, name: impl Into<String>, palettes: [ThemePalette; 12]) {
        self.themes
            .insert(name.into(), ThemeEntry::Monthly(Box::new(palettes)));
    }

    /// Adds the themes of a JSON catalog, replacing same-named entries.
    ///
    /// Expected shape: `{"static": {name: palette}, "monthly": {name: [12 palettes]}}`.
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| ThemeError::Parse(e.to_string()))?;

        for (name, palettes) in file.monthly {
            let count = palettes.len();
            let palettes: [ThemePalette; 12] = match palettes.try_into() {
                Ok(palettes) => palettes,
                Err(_) => return Err(ThemeError::InvalidMonthlyTheme { name, count }),
            };
            self.insert_monthly(name, palettes);
        }

        for (name, palette) in file.static_themes {
            self.insert_static(name, palette);
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ThemeEntry> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Theme names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Palette for `name` and a month index (0 = January).
    ///
    /// Unknown names resolve to the light theme.
    ///
    /// # Panics
    ///
    /// Panics if `name` is a monthly theme and `month_index` is not in `0..12`.
    pub fn resolve(&self, name: &str, month_index: u32) -> &ThemePalette {
        match self.themes.get(name) {
            Some(ThemeEntry::Monthly(palettes)) => &palettes[month_index as usize],
            Some(ThemeEntry::Static(palette)) => palette,
            None => {
                tracing::debug!(theme = name, "Unknown theme, using {DEFAULT_THEME}");
                self.default_palette()
            }
        }
    }

    fn default_palette(&self) -> &ThemePalette {
        match self.themes.get(DEFAULT_THEME) {
            Some(ThemeEntry::Static(palette)) => palette,
            _ => &FALLBACK,
        }
    }
}

/// Resolves a theme against the built-in catalog.
pub fn resolve_theme(name: &str, month_index: u32) -> &'static ThemePalette {
    ThemeCatalog::builtin().resolve(name, month_index)
}
