//! Dashboard counters and human-readable formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vault_entity::file::FileRecord;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Totals over the non-deleted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultStats {
    /// Files and folders outside the trash.
    pub total_items: usize,
    /// Of those, how many carry the secure badge.
    pub secure_items: usize,
    /// Regular files.
    pub file_count: usize,
    /// Folders.
    pub folder_count: usize,
    /// Sum of file sizes in bytes.
    pub total_bytes: u64,
    /// Records in the trash.
    pub trashed_items: usize,
}

impl VaultStats {
    /// Compute totals over `records`.
    pub fn collect(records: &[FileRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            if record.is_deleted {
                stats.trashed_items += 1;
                continue;
            }
            stats.total_items += 1;
            if record.is_secure {
                stats.secure_items += 1;
            }
            if record.is_folder() {
                stats.folder_count += 1;
            } else {
                stats.file_count += 1;
            }
            stats.total_bytes += record.size.unwrap_or(0);
        }
        stats
    }
}

/// Format a byte count with base-1024 units and one decimal, e.g. `1.5 KB`.
///
/// A trailing `.0` is dropped; sizes past gigabytes stay in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0} {}", SIZE_UNITS[unit])
    } else {
        format!("{rounded:.1} {}", SIZE_UNITS[unit])
    }
}

/// Describe how long ago `at` was, relative to `now`.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} minute{} ago", plural(minutes))
    } else if hours < 24 {
        format!("{hours} hour{} ago", plural(hours))
    } else {
        format!("{days} day{} ago", plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024 * 1024), "3072 GB");
    }

    #[test]
    fn test_format_relative() {
        let now = Utc::now();
        assert_eq!(format_relative(now, now), "Just now");
        assert_eq!(format_relative(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_relative(now - Duration::minutes(59), now), "59 minutes ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_relative(now - Duration::days(1), now), "1 day ago");
    }
}
