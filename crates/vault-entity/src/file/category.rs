//! Content category derived from a file name's extension.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad content category of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Text and office documents.
    Document,
    /// Raster and vector images.
    Image,
    /// Video containers.
    Video,
    /// Audio files.
    Audio,
    /// Compressed archives.
    Archive,
    /// Anything unrecognized, including names without an extension.
    Other,
}

impl FileCategory {
    /// Classify a file by the extension of its name (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match extension(name).as_deref() {
            Some(ext) => Self::from_extension(ext),
            None => Self::Other,
        }
    }

    /// Classify a lowercase extension without the leading dot.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" => Self::Image,
            "mp4" | "avi" | "mov" | "wmv" | "flv" => Self::Video,
            "mp3" | "wav" | "flac" | "aac" => Self::Audio,
            "pdf" | "doc" | "docx" | "txt" | "rtf" => Self::Document,
            "zip" | "rar" | "7z" | "tar" | "gz" => Self::Archive,
            _ => Self::Other,
        }
    }

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Archive => "archive",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Get the lowercase extension of a file name, if it has one.
pub fn extension(name: &str) -> Option<String> {
    name.rsplit('.')
        .next()
        .filter(|ext| *ext != name)
        .map(|ext| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(FileCategory::from_name("report.pdf"), FileCategory::Document);
        assert_eq!(FileCategory::from_name("photo.JPEG"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("clip.mov"), FileCategory::Video);
        assert_eq!(FileCategory::from_name("song.flac"), FileCategory::Audio);
        assert_eq!(FileCategory::from_name("backup.tar.gz"), FileCategory::Archive);
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(FileCategory::from_name("main.rs"), FileCategory::Other);
        assert_eq!(FileCategory::from_name("Makefile"), FileCategory::Other);
        assert_eq!(FileCategory::from_name("pdf"), FileCategory::Other);
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("a.TXT"), Some("txt".to_string()));
        assert_eq!(extension("noext"), None);
    }
}
