// Rust guideline compliant 2026-10-12

//! Core data models for Folio.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level grouping of projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Studio work. Later relabeled "Work".
    #[default]
    #[serde(alias = "Work")]
    Std,
    /// Experiments. Later relabeled "Zine".
    #[serde(alias = "Zine")]
    Lab,
}

impl Mode {
    /// Both modes in display order.
    pub const ALL: [Mode; 2] = [Mode::Std, Mode::Lab];

    /// Returns the key used for this mode's list in the category document.
    #[must_use]
    pub fn list_key(&self) -> &'static str {
        match self {
            Mode::Std => "std",
            Mode::Lab => "lab",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Std => f.write_str("Std"),
            Mode::Lab => f.write_str("Lab"),
        }
    }
}

impl FromStr for Mode {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "std" | "work" => Ok(Mode::Std),
            "lab" | "zine" => Ok(Mode::Lab),
            other => Err(crate::Error::InvalidValue(format!(
                "mode must be Std or Lab, got '{}'",
                other
            ))),
        }
    }
}

/// Masonry layout hint for a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Landscape card.
    Wide,
    /// Square card.
    Square,
    /// Portrait card.
    #[default]
    Tall,
}

impl FromStr for Layout {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "wide" => Ok(Layout::Wide),
            "square" => Ok(Layout::Square),
            "tall" => Ok(Layout::Tall),
            other => Err(crate::Error::InvalidValue(format!(
                "type must be wide, square, or tall, got '{}'",
                other
            ))),
        }
    }
}

/// Legacy primary image field: older records hold one URL or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// A single URL.
    One(String),
    /// Several URLs, in display order.
    Many(Vec<String>),
}

impl ImageSource {
    /// Returns the URLs in order.
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        match self {
            ImageSource::One(url) => vec![url.as_str()],
            ImageSource::Many(urls) => urls.iter().map(String::as_str).collect(),
        }
    }
}

/// A single portfolio entry with media and descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque stable identifier assigned by the document store.
    pub id: String,
    /// Top-level grouping. Records without one read as Std.
    #[serde(default)]
    pub mode: Mode,
    /// Category name from the managed category list.
    #[serde(default)]
    pub category: String,
    /// Card and detail title.
    pub title: String,
    /// Short line shown under the title.
    #[serde(default, alias = "sub", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Long-form description for the detail view.
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary media URL (image or video).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Legacy primary media, used only when `thumbnail` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageSource>,
    /// Detail media URLs in display order.
    #[serde(default)]
    pub sub_images: Vec<String>,
    /// Layout hint.
    #[serde(default, rename = "type")]
    pub layout: Layout,
    /// Free-form date, usually a year. Sorted lexicographically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Role on the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Client name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Unix timestamp of creation, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Project {
    /// Creates a project with the given identity and empty optional fields.
    pub fn new(id: String, mode: Mode, category: String, title: String) -> Self {
        Self {
            id,
            mode,
            category,
            title,
            subtitle: None,
            description: None,
            thumbnail: None,
            image_url: None,
            sub_images: Vec::new(),
            layout: Layout::default(),
            date: None,
            role: None,
            client: None,
            created_at: None,
        }
    }

    /// Validates the project record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty
    /// - Title is empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidProject(
                "ID cannot be empty".to_string(),
            ));
        }

        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidProject(
                "Title cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the sort key used for gallery ordering. Missing dates sort as "0".
    #[must_use]
    pub fn date_key(&self) -> &str {
        self.date.as_deref().unwrap_or("0")
    }
}

fn default_std_categories() -> Vec<String> {
    ["Brand", "Package", "Editorial", "Poster"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_lab_categories() -> Vec<String> {
    ["Interaction", "Code", "Experiment"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Allowed category lists per mode. Each list is an ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategorySet {
    /// Categories for `Mode::Std`.
    #[serde(default)]
    pub std: Vec<String>,
    /// Categories for `Mode::Lab`.
    #[serde(default)]
    pub lab: Vec<String>,
}

impl CategorySet {
    /// Returns the set written on first read when the document is absent.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            std: default_std_categories(),
            lab: default_lab_categories(),
        }
    }

    /// Returns the list for a mode.
    #[must_use]
    pub fn list(&self, mode: Mode) -> &[String] {
        match mode {
            Mode::Std => &self.std,
            Mode::Lab => &self.lab,
        }
    }

    fn list_mut(&mut self, mode: Mode) -> &mut Vec<String> {
        match mode {
            Mode::Std => &mut self.std,
            Mode::Lab => &mut self.lab,
        }
    }

    /// Adds a category (set union). The value is trimmed; blank values are ignored.
    ///
    /// # Returns
    ///
    /// True if the list changed.
    pub fn add(&mut self, mode: Mode, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let list = self.list_mut(mode);
        if list.iter().any(|existing| existing == value) {
            return false;
        }
        list.push(value.to_string());
        true
    }

    /// Removes every occurrence of a category (set difference).
    ///
    /// # Returns
    ///
    /// True if the list changed.
    pub fn remove(&mut self, mode: Mode, value: &str) -> bool {
        let list = self.list_mut(mode);
        let before = list.len();
        list.retain(|existing| existing != value);
        list.len() != before
    }

    /// Returns both lists concatenated, Std first.
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        self.std.iter().chain(self.lab.iter()).cloned().collect()
    }
}
