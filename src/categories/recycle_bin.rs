use super::{existing, Category};
use crate::config::CleanOptions;
use std::path::PathBuf;

pub struct RecycleBin;

impl Category for RecycleBin {
    fn name(&self) -> &'static str {
        "recycle-bin"
    }

    fn label(&self) -> &'static str {
        "Recycle Bin"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.recycle_bin
    }

    #[cfg(windows)]
    fn directories(&self) -> Vec<PathBuf> {
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        existing([PathBuf::from(format!(r"{drive}\$Recycle.Bin"))])
    }

    #[cfg(not(windows))]
    fn directories(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        // freedesktop.org trash keeps payload and metadata side by side.
        if let Some(data) = dirs::data_dir() {
            candidates.push(data.join("Trash/files"));
            candidates.push(data.join("Trash/info"));
        }
        if let Some(home) = crate::utils::home_dir() {
            candidates.push(home.join(".Trash"));
        }
        existing(candidates)
    }
}
