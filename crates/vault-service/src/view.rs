//! Navigation state: current folder, search, view mode and selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use vault_core::error::AppError;
use vault_core::types::FileId;

/// How listings are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Icon grid.
    #[default]
    Grid,
    /// Detailed list.
    List,
}

/// Which listing a caller is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Children of the current path.
    Folders,
    /// Starred records.
    Favorites,
    /// Most recently modified records.
    Recent,
    /// Soft-deleted records.
    Trash,
}

impl Section {
    /// Return the section as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folders => "folders",
            Self::Favorites => "favorites",
            Self::Recent => "recent",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "folders" => Ok(Self::Folders),
            "favorites" => Ok(Self::Favorites),
            "recent" => Ok(Self::Recent),
            "trash" => Ok(Self::Trash),
            _ => Err(AppError::validation(format!(
                "Invalid section: '{s}'. Expected one of: folders, favorites, recent, trash"
            ))),
        }
    }
}

/// Transient navigation state. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Folder being viewed; `/` is the root.
    pub current_path: String,
    /// Case-insensitive name filter; empty means no filter.
    pub search_query: String,
    /// Grid or list layout.
    pub view_mode: ViewMode,
    /// Currently selected records.
    pub selected: Vec<FileId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            search_query: String::new(),
            view_mode: ViewMode::default(),
            selected: Vec::new(),
        }
    }
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Display label (`Home` for the root).
    pub label: String,
    /// Path to navigate to.
    pub path: String,
}

/// Ensure a leading `/`, collapse empty segments and drop a trailing `/`.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Breadcrumb trail from the root down to `path`.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb {
        label: "Home".to_string(),
        path: "/".to_string(),
    }];

    let mut current = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current.push('/');
        current.push_str(segment);
        trail.push(Breadcrumb {
            label: segment.to_string(),
            path: current.clone(),
        });
    }

    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("Projects/"), "/Projects");
        assert_eq!(normalize_path("//a//b/"), "/a/b");
    }

    #[test]
    fn test_breadcrumbs() {
        let trail = breadcrumbs("/Projects/2024/q1");
        let paths: Vec<&str> = trail.iter().map(|b| b.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/Projects", "/Projects/2024", "/Projects/2024/q1"]);
        assert_eq!(trail[0].label, "Home");
        assert_eq!(trail[3].label, "q1");
        assert_eq!(breadcrumbs("/").len(), 1);
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("Trash".parse::<Section>().unwrap(), Section::Trash);
        assert!("dashboard".parse::<Section>().is_err());
    }
}
