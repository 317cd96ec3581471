use super::{existing, Category};
use crate::config::CleanOptions;
use std::path::PathBuf;
use std::time::Duration;

/// Temp files younger than this may still be in use by an installer or build.
const TEMP_MIN_AGE: Duration = Duration::from_secs(24 * 3600);

pub struct SystemTemp;

impl Category for SystemTemp {
    fn name(&self) -> &'static str {
        "system-temp"
    }

    fn label(&self) -> &'static str {
        "System Temp Files"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.system_temp
    }

    fn directories(&self) -> Vec<PathBuf> {
        existing([system_temp_dir()])
    }

    fn max_age(&self) -> Duration {
        TEMP_MIN_AGE
    }
}

pub struct UserTemp;

impl Category for UserTemp {
    fn name(&self) -> &'static str {
        "user-temp"
    }

    fn label(&self) -> &'static str {
        "User Temp Files"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.user_temp
    }

    fn directories(&self) -> Vec<PathBuf> {
        let user = std::env::temp_dir();
        // On most Unix systems this is the same as the system temp dir.
        if user == system_temp_dir() {
            return vec![];
        }
        existing([user])
    }

    fn max_age(&self) -> Duration {
        TEMP_MIN_AGE
    }
}

#[cfg(windows)]
fn system_temp_dir() -> PathBuf {
    super::system_root().join("Temp")
}

#[cfg(not(windows))]
fn system_temp_dir() -> PathBuf {
    PathBuf::from("/tmp")
}
