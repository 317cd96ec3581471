use super::{existing, Category};
use crate::config::CleanOptions;
use std::path::PathBuf;
use std::time::Duration;

const WEEK: Duration = Duration::from_secs(7 * 86_400);

/// Windows prefetch traces. Rebuilt by the OS on next launch.
pub struct Prefetch;

impl Category for Prefetch {
    fn name(&self) -> &'static str {
        "prefetch"
    }

    fn label(&self) -> &'static str {
        "Prefetch Data"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.prefetch
    }

    #[cfg(windows)]
    fn directories(&self) -> Vec<PathBuf> {
        existing([super::system_root().join("Prefetch")])
    }

    #[cfg(not(windows))]
    fn directories(&self) -> Vec<PathBuf> {
        vec![]
    }

    fn max_age(&self) -> Duration {
        WEEK
    }
}

pub struct ThumbnailCache;

impl Category for ThumbnailCache {
    fn name(&self) -> &'static str {
        "thumbnail-cache"
    }

    fn label(&self) -> &'static str {
        "Thumbnail Cache"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.thumbnail_cache
    }

    fn directories(&self) -> Vec<PathBuf> {
        if cfg!(windows) {
            existing(dirs::data_local_dir().map(|d| d.join("Microsoft/Windows/Explorer")))
        } else if cfg!(target_os = "macos") {
            vec![]
        } else {
            existing(dirs::cache_dir().map(|d| d.join("thumbnails")))
        }
    }

    fn owner_processes(&self) -> &'static [&'static str] {
        &["explorer"]
    }
}

pub struct EventLogs;

impl Category for EventLogs {
    fn name(&self) -> &'static str {
        "event-logs"
    }

    fn label(&self) -> &'static str {
        "System Event Logs"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.event_logs
    }

    #[cfg(windows)]
    fn directories(&self) -> Vec<PathBuf> {
        existing([super::system_root().join(r"System32\winevt\Logs")])
    }

    #[cfg(not(windows))]
    fn directories(&self) -> Vec<PathBuf> {
        existing([PathBuf::from("/var/log")])
    }

    fn max_age(&self) -> Duration {
        WEEK
    }
}
