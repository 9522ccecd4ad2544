//! Upload progress reporting and the secure-badge policy.

use serde::{Deserialize, Serialize};

use vault_core::config::SecurePolicy;

/// Share of the progress bar covered while records are prepared; the
/// final step to 100 happens once they are committed.
const PREPARE_SHARE: u32 = 90;

/// One progress report during an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTick {
    /// Files prepared so far.
    pub completed: usize,
    /// Files in this upload.
    pub total: usize,
    /// Overall progress, 0 to 100.
    pub percent: u8,
}

impl UploadTick {
    /// Progress after `completed` of `total` files were prepared.
    pub fn prepared(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            PREPARE_SHARE
        } else {
            (completed as u32 * PREPARE_SHARE) / total as u32
        };
        Self {
            completed,
            total,
            percent: percent as u8,
        }
    }

    /// Final report once all records are committed.
    pub fn done(total: usize) -> Self {
        Self {
            completed: total,
            total,
            percent: 100,
        }
    }
}

/// Decide the secure badge for one uploaded file.
pub fn secure_flag(policy: SecurePolicy) -> bool {
    match policy {
        SecurePolicy::Random => rand::random::<bool>(),
        SecurePolicy::Always => true,
        SecurePolicy::Never => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepared_progress() {
        assert_eq!(UploadTick::prepared(0, 4).percent, 0);
        assert_eq!(UploadTick::prepared(2, 4).percent, 45);
        assert_eq!(UploadTick::prepared(4, 4).percent, 90);
        assert_eq!(UploadTick::done(4).percent, 100);
    }

    #[test]
    fn test_fixed_policies() {
        assert!(secure_flag(SecurePolicy::Always));
        assert!(!secure_flag(SecurePolicy::Never));
    }
}
