// SPDX-License-Identifier: MPL-2.0
//! Theme attribute lookup.
//!
//! A theme is a set of named views, each holding named elements with a `kind`
//! and a bag of typed attributes. The carousel asks for attributes by
//! `(view, element, kind)` and treats every one as optional: anything absent
//! or mistyped keeps its built-in default. Elements flagged `extra = true`
//! are the background decoration layers of their view.
//!
//! On disk a theme is a `theme.toml`:
//!
//! ```toml
//! [system.systemcarousel]
//! kind = "carousel"
//! type = "vertical"
//! size = [1.0, 0.2325]
//! color = "FFFFFFD8"
//!
//! [system.backdrop]
//! kind = "image"
//! extra = true
//! z_index = 10.0
//! path = "backgrounds/backdrop.png"
//! ```
//!
//! A theme directory holds one subdirectory per theme name, each with its own
//! `theme.toml`; collections pick a theme by name.

use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::render::Rgba;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One themed element: a kind tag plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeElement {
    name: String,
    kind: String,
    extra: bool,
    properties: toml::Table,
    base_dir: PathBuf,
}

impl ThemeElement {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether this element is a background decoration layer.
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.extra
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.properties.get(key)?.as_str()
    }

    pub fn float(&self, key: &str) -> Option<f32> {
        match self.properties.get(key)? {
            toml::Value::Float(f) => Some(*f as f32),
            toml::Value::Integer(i) => Some(*i as f32),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.properties.get(key)?.as_bool()
    }

    /// A two-element numeric array, e.g. `size = [1.0, 0.2325]`.
    pub fn vec2(&self, key: &str) -> Option<Vec2> {
        let arr = self.properties.get(key)?.as_array()?;
        if arr.len() != 2 {
            return None;
        }
        let number = |v: &toml::Value| match v {
            toml::Value::Float(f) => Some(*f as f32),
            toml::Value::Integer(i) => Some(*i as f32),
            _ => None,
        };
        Some(Vec2::new(number(&arr[0])?, number(&arr[1])?))
    }

    /// A packed hex color string (`RRGGBB[AA]`).
    pub fn color(&self, key: &str) -> Option<Rgba> {
        Rgba::from_hex(self.string(key)?)
    }

    /// A path attribute resolved against the theme's directory.
    pub fn path(&self, key: &str) -> Option<PathBuf> {
        let raw = self.string(key)?;
        let path = Path::new(raw);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(self.base_dir.join(path))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ThemeView {
    elements: Vec<ThemeElement>,
}

/// A parsed theme: views of elements, plus the directory its relative asset
/// paths resolve against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    views: HashMap<String, ThemeView>,
}

impl Theme {
    /// Parses a theme, resolving relative asset paths against `base_dir`.
    pub fn from_toml_str(input: &str, base_dir: &Path) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(input).map_err(|e| Error::Theme(e.to_string()))?;
        let mut views = HashMap::new();
        for (view_name, view_value) in table {
            let toml::Value::Table(element_tables) = view_value else {
                return Err(Error::Theme(format!(
                    "view `{}` must be a table of elements",
                    view_name
                )));
            };
            let mut elements = Vec::new();
            for (element_name, element_value) in element_tables {
                let toml::Value::Table(properties) = element_value else {
                    return Err(Error::Theme(format!(
                        "element `{}.{}` must be a table",
                        view_name, element_name
                    )));
                };
                let kind = properties
                    .get("kind")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                let extra = properties
                    .get("extra")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);
                elements.push(ThemeElement {
                    name: element_name,
                    kind,
                    extra,
                    properties,
                    base_dir: base_dir.to_path_buf(),
                });
            }
            views.insert(view_name, ThemeView { elements });
        }
        Ok(Self { views })
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&contents, base_dir)
    }

    #[must_use]
    pub fn has_view(&self, view: &str) -> bool {
        self.views.contains_key(view)
    }

    /// Looks up an element by view, name, and expected kind. A kind mismatch
    /// is treated the same as absence.
    pub fn element(&self, view: &str, name: &str, kind: &str) -> Option<&ThemeElement> {
        self.views
            .get(view)?
            .elements
            .iter()
            .find(|e| e.name == name && e.kind == kind)
    }

    /// The decoration-layer elements of a view, in file order.
    pub fn extras(&self, view: &str) -> Vec<&ThemeElement> {
        self.views
            .get(view)
            .map(|v| v.elements.iter().filter(|e| e.extra).collect())
            .unwrap_or_default()
    }
}

/// All themes under a theme directory, keyed by subdirectory name.
#[derive(Debug, Clone, Default)]
pub struct ThemeSet {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeSet {
    /// Loads every `<dir>/<name>/theme.toml`. Unparseable themes are logged
    /// and skipped; a missing directory yields an empty set.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut themes = HashMap::new();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), %err, "theme directory unavailable");
                return Ok(Self::default());
            }
        };
        for entry in entries {
            let entry = entry?;
            let manifest = entry.path().join("theme.toml");
            if !manifest.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            match Theme::load_from_path(&manifest) {
                Ok(theme) => {
                    themes.insert(name, theme);
                }
                Err(err) => {
                    tracing::warn!(theme = %name, %err, "skipping unparseable theme");
                }
            }
        }
        Ok(Self {
            themes,
            fallback: Theme::default(),
        })
    }

    #[must_use]
    pub fn from_themes(themes: HashMap<String, Theme>) -> Self {
        Self {
            themes,
            fallback: Theme::default(),
        }
    }

    /// The named theme, or an empty theme when the name is absent or unknown
    /// (every attribute then falls back to its default).
    #[must_use]
    pub fn theme_for(&self, name: Option<&str>) -> &Theme {
        name.and_then(|n| self.themes.get(n))
            .unwrap_or(&self.fallback)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
