use super::{existing, Category};
use crate::config::CleanOptions;
use std::path::PathBuf;

pub struct SteamCache;

impl SteamCache {
    fn roots() -> Vec<PathBuf> {
        let mut roots = Vec::new();
        if cfg!(windows) {
            if let Some(pf) = std::env::var_os("ProgramFiles(x86)") {
                roots.push(PathBuf::from(pf).join("Steam"));
            }
            if let Some(local) = dirs::data_local_dir() {
                roots.push(local.join("Steam"));
            }
        } else if let Some(data) = dirs::data_dir() {
            roots.push(data.join("Steam"));
        }
        roots
    }
}

impl Category for SteamCache {
    fn name(&self) -> &'static str {
        "steam-cache"
    }

    fn label(&self) -> &'static str {
        "Steam Cache"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.steam_cache
    }

    fn directories(&self) -> Vec<PathBuf> {
        existing(Self::roots().into_iter().flat_map(|root| {
            [
                root.join("htmlcache"),
                root.join("appcache/httpcache"),
                root.join("steamapps/shadercache"),
            ]
        }))
    }

    fn owner_processes(&self) -> &'static [&'static str] {
        &["steam", "steamwebhelper"]
    }
}

pub struct EpicCache;

impl Category for EpicCache {
    fn name(&self) -> &'static str {
        "epic-cache"
    }

    fn label(&self) -> &'static str {
        "Epic Games Launcher Cache"
    }

    fn enabled(&self, opts: &CleanOptions) -> bool {
        opts.epic_cache
    }

    fn directories(&self) -> Vec<PathBuf> {
        if !cfg!(windows) {
            return vec![];
        }
        let Some(saved) = dirs::data_local_dir().map(|d| d.join("EpicGamesLauncher/Saved")) else {
            return vec![];
        };
        // The launcher versions its cache dir: webcache, webcache_4147, ...
        let mut dirs: Vec<PathBuf> = match std::fs::read_dir(&saved) {
            Ok(read_dir) => read_dir
                .flatten()
                .filter(|e| e.file_name().to_string_lossy().starts_with("webcache"))
                .map(|e| e.path())
                .collect(),
            Err(_) => return vec![],
        };
        dirs.sort();
        existing(dirs)
    }

    fn owner_processes(&self) -> &'static [&'static str] {
        &["epicgameslauncher"]
    }
}
