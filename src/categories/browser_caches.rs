use super::{profile_subdirs, Category};
use crate::config::CleanOptions;
use std::path::PathBuf;

/// Chromium keeps one cache pair per profile: Default, Profile 1, etc.
const CHROMIUM_CACHE_DIRS: &[&str] = &["Cache", "Code Cache", "GPUCache"];

pub struct ChromeCache;

impl ChromeCache {
    fn base() -> Option<PathBuf> {
        if cfg!(windows) {
            dirs::data_local_dir().map(|d| d.join("Google/Chrome/User Data"))
        } else if cfg!(target_os = "macos") {
            dirs::cache_dir().map(|d| d.join("Google/Chrome"))
        } else {
            dirs::cache_dir().map(|d| d.join("google-chrome"))
        }
    }
}

impl Category for ChromeCache {
    fn name(&self) -> &'static str {
        "chrome-cache"
    }

    fn label(&self) -> &'static str {
        "Chrome Cache"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.chrome_cache
    }

    fn directories(&self) -> Vec<PathBuf> {
        Self::base()
            .map(|base| profile_subdirs(&base, CHROMIUM_CACHE_DIRS))
            .unwrap_or_default()
    }

    fn owner_processes(&self) -> &'static [&'static str] {
        &["chrome", "google chrome"]
    }
}

pub struct EdgeCache;

impl EdgeCache {
    fn base() -> Option<PathBuf> {
        if cfg!(windows) {
            dirs::data_local_dir().map(|d| d.join("Microsoft/Edge/User Data"))
        } else if cfg!(target_os = "macos") {
            dirs::cache_dir().map(|d| d.join("Microsoft Edge"))
        } else {
            dirs::cache_dir().map(|d| d.join("microsoft-edge"))
        }
    }
}

impl Category for EdgeCache {
    fn name(&self) -> &'static str {
        "edge-cache"
    }

    fn label(&self) -> &'static str {
        "Edge Cache"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.edge_cache
    }

    fn directories(&self) -> Vec<PathBuf> {
        Self::base()
            .map(|base| profile_subdirs(&base, CHROMIUM_CACHE_DIRS))
            .unwrap_or_default()
    }

    fn owner_processes(&self) -> &'static [&'static str] {
        &["msedge", "microsoft edge"]
    }
}

pub struct FirefoxCache;

impl FirefoxCache {
    fn profiles_dir() -> Option<PathBuf> {
        if cfg!(windows) {
            dirs::data_local_dir().map(|d| d.join("Mozilla/Firefox/Profiles"))
        } else if cfg!(target_os = "macos") {
            dirs::cache_dir().map(|d| d.join("Firefox/Profiles"))
        } else {
            dirs::cache_dir().map(|d| d.join("mozilla/firefox"))
        }
    }
}

impl Category for FirefoxCache {
    fn name(&self) -> &'static str {
        "firefox-cache"
    }

    fn label(&self) -> &'static str {
        "Firefox Cache"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.firefox_cache
    }

    fn directories(&self) -> Vec<PathBuf> {
        Self::profiles_dir()
            .map(|profiles| profile_subdirs(&profiles, &["cache2", "startupCache"]))
            .unwrap_or_default()
    }

    fn owner_processes(&self) -> &'static [&'static str] {
        &["firefox"]
    }
}
