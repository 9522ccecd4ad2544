//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use vault_entity::file::FileRecord;
use vault_service::format_size;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One record as shown in listings
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// Record ID
    pub id: String,
    /// Name
    pub name: String,
    /// File or folder
    pub kind: String,
    /// Content category
    pub category: String,
    /// Human-readable size
    pub size: String,
    /// Absolute path
    pub path: String,
    /// Last modified
    pub modified: String,
    /// Favorite / secure markers
    pub flags: String,
}

impl From<&FileRecord> for FileRow {
    fn from(record: &FileRecord) -> Self {
        let mut flags = String::new();
        if record.is_favorite {
            flags.push('★');
        }
        if record.is_secure {
            flags.push('🔒');
        }

        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            kind: if record.is_folder() { "folder" } else { "file" }.to_string(),
            category: record
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            size: record
                .size
                .map(format_size)
                .unwrap_or_else(|| "-".to_string()),
            path: record.path.clone(),
            modified: record.modified_at.format("%Y-%m-%d %H:%M").to_string(),
            flags,
        }
    }
}

/// Print records as rows in the selected format
pub fn print_records(records: &[&FileRecord], format: OutputFormat) {
    let rows: Vec<FileRow> = records.iter().map(|r| FileRow::from(*r)).collect();
    print_list(&rows, format);
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item as JSON
pub fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
