mod browser_caches;
mod game_caches;
mod recycle_bin;
mod system_files;
mod temp_files;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::CleanOptions;

/// Category name given to directories passed on the command line.
pub const CUSTOM_CATEGORY: &str = "custom";
pub const CUSTOM_LABEL: &str = "Custom Paths";

/// A named group of directories that can be cleaned together.
pub trait Category: Send + Sync {
    /// Machine-readable name used in --category flag (e.g. "user-temp").
    fn name(&self) -> &'static str;

    /// Human-readable label for display (e.g. "User Temp Files").
    fn label(&self) -> &'static str;

    /// Whether this category is switched on in `opts`.
    fn enabled(&self, opts: &CleanOptions) -> bool;

    /// Directories for this category that exist on this machine.
    fn directories(&self) -> Vec<PathBuf>;

    /// Minimum file age before removal. Zero removes regardless of age.
    fn max_age(&self) -> Duration {
        Duration::ZERO
    }

    /// Programs that may hold these files open while running.
    fn owner_processes(&self) -> &'static [&'static str] {
        &[]
    }
}

/// One directory to clean, with the policy that applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanTarget {
    pub category: &'static str,
    pub label: &'static str,
    pub path: PathBuf,
    pub max_age: Duration,
}

pub fn all_categories() -> Vec<Box<dyn Category>> {
    vec![
        Box::new(temp_files::SystemTemp),
        Box::new(temp_files::UserTemp),
        Box::new(system_files::Prefetch),
        Box::new(system_files::ThumbnailCache),
        Box::new(browser_caches::ChromeCache),
        Box::new(browser_caches::FirefoxCache),
        Box::new(browser_caches::EdgeCache),
        Box::new(recycle_bin::RecycleBin),
        Box::new(system_files::EventLogs),
        Box::new(game_caches::SteamCache),
        Box::new(game_caches::EpicCache),
    ]
}

pub fn find_category(name: &str) -> Option<Box<dyn Category>> {
    all_categories().into_iter().find(|c| c.name() == name)
}

pub fn all_category_names() -> Vec<&'static str> {
    all_categories().iter().map(|c| c.name()).collect()
}

/// Targets for every category enabled in `opts`, in registry order.
pub fn resolve_targets(
    opts: &CleanOptions,
    overrides: &BTreeMap<String, Duration>,
) -> Vec<CleanTarget> {
    let categories: Vec<_> = all_categories()
        .into_iter()
        .filter(|c| c.enabled(opts))
        .collect();
    targets_for(&categories, overrides)
}

/// Targets for an explicit list of categories, in the order given.
/// Directories already claimed by an earlier category are dropped so that
/// no two targets point at the same tree.
pub fn targets_for(
    categories: &[Box<dyn Category>],
    overrides: &BTreeMap<String, Duration>,
) -> Vec<CleanTarget> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for category in categories {
        let max_age = overrides
            .get(category.name())
            .copied()
            .unwrap_or_else(|| category.max_age());

        for path in category.directories() {
            if !seen.insert(path.clone()) {
                continue;
            }
            targets.push(CleanTarget {
                category: category.name(),
                label: category.label(),
                path,
                max_age,
            });
        }
    }

    targets
}

/// Targets for directories named directly by the user.
pub fn custom_targets(paths: &[PathBuf], max_age: Duration) -> Vec<CleanTarget> {
    let mut seen = HashSet::new();
    paths
        .iter()
        .filter(|p| seen.insert(p.to_path_buf()))
        .map(|path| CleanTarget {
            category: CUSTOM_CATEGORY,
            label: CUSTOM_LABEL,
            path: path.clone(),
            max_age,
        })
        .collect()
}

/// Drop every target that overlaps one listed before it.
///
/// Two targets overlap when their directories are the same or one lies inside
/// the other, compared after resolving symlinks where the path exists. The
/// first claimant wins, so the cleaner never walks a file twice.
pub fn disjoint(targets: Vec<CleanTarget>) -> Vec<CleanTarget> {
    let mut claimed: Vec<PathBuf> = Vec::new();
    let mut kept = Vec::with_capacity(targets.len());

    for target in targets {
        let key = std::fs::canonicalize(&target.path).unwrap_or_else(|_| target.path.clone());
        if let Some(owner) = claimed
            .iter()
            .find(|c| key.starts_with(c) || c.starts_with(&key))
        {
            tracing::warn!(
                "Skipping {} for {}: overlaps {}",
                target.path.display(),
                target.label,
                owner.display()
            );
            continue;
        }
        claimed.push(key);
        kept.push(target);
    }

    kept
}

/// Keep only the candidates that are existing directories.
fn existing(candidates: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    candidates.into_iter().filter(|p| p.is_dir()).collect()
}

/// Subdirectories of `base` (one level) that contain any of `children`.
fn profile_subdirs(base: &Path, children: &[&str]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let Ok(read_dir) = std::fs::read_dir(base) else {
        return dirs;
    };
    for entry in read_dir.flatten() {
        let profile_path = entry.path();
        if !profile_path.is_dir() {
            continue;
        }
        for child in children {
            let dir = profile_path.join(child);
            if dir.is_dir() {
                dirs.push(dir);
            }
        }
    }
    dirs.sort();
    dirs
}

/// `%SystemRoot%`, defaulting to `C:\Windows`.
#[cfg(windows)]
fn system_root() -> PathBuf {
    std::env::var_os("SystemRoot")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        dirs: Vec<PathBuf>,
        age: Duration,
    }

    impl Category for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn label(&self) -> &'static str {
            "Fixed"
        }
        fn enabled(&self, _: &CleanOptions) -> bool {
            true
        }
        fn directories(&self) -> Vec<PathBuf> {
            self.dirs.clone()
        }
        fn max_age(&self) -> Duration {
            self.age
        }
    }

    #[test]
    fn names_are_unique_and_findable() {
        let names = all_category_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());

        for name in names {
            assert_eq!(find_category(name).unwrap().name(), name);
        }
        assert!(find_category("no-such-thing").is_none());
    }

    #[test]
    fn every_option_maps_to_a_category() {
        let opts = CleanOptions::none();
        assert!(all_categories().iter().all(|c| !c.enabled(&opts)));
        assert!(resolve_targets(&opts, &BTreeMap::new()).is_empty());
    }

    #[test]
    fn duplicate_directories_are_claimed_once() {
        let shared = PathBuf::from("/shared");
        let categories: Vec<Box<dyn Category>> = vec![
            Box::new(Fixed {
                name: "first",
                dirs: vec![shared.clone(), PathBuf::from("/a")],
                age: Duration::ZERO,
            }),
            Box::new(Fixed {
                name: "second",
                dirs: vec![shared.clone(), PathBuf::from("/b")],
                age: Duration::from_secs(60),
            }),
        ];

        let targets = targets_for(&categories, &BTreeMap::new());

        let got: Vec<_> = targets.iter().map(|t| (t.category, t.path.clone())).collect();
        assert_eq!(
            got,
            vec![
                ("first", shared),
                ("first", PathBuf::from("/a")),
                ("second", PathBuf::from("/b")),
            ]
        );
        assert_eq!(targets[2].max_age, Duration::from_secs(60));
    }

    #[test]
    fn overrides_replace_default_age() {
        let categories: Vec<Box<dyn Category>> = vec![Box::new(Fixed {
            name: "first",
            dirs: vec![PathBuf::from("/a")],
            age: Duration::from_secs(60),
        })];
        let overrides = BTreeMap::from([("first".to_string(), Duration::from_secs(5))]);

        let targets = targets_for(&categories, &overrides);

        assert_eq!(targets[0].max_age, Duration::from_secs(5));
    }

    #[test]
    fn custom_targets_dedupe_and_keep_order() {
        let paths = vec![PathBuf::from("/x"), PathBuf::from("/y"), PathBuf::from("/x")];
        let targets = custom_targets(&paths, Duration::ZERO);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].path, PathBuf::from("/x"));
        assert!(targets.iter().all(|t| t.category == CUSTOM_CATEGORY));
    }

    fn target(category: &'static str, path: PathBuf) -> CleanTarget {
        CleanTarget {
            category,
            label: "Fixed",
            path,
            max_age: Duration::ZERO,
        }
    }

    #[test]
    fn overlapping_targets_keep_the_first_claimant() {
        let root = tempfile::tempdir().unwrap();
        let cache = root.path().join("cache");
        let thumbs = cache.join("thumbnails");
        let other = root.path().join("other");
        std::fs::create_dir_all(&thumbs).unwrap();
        std::fs::create_dir_all(&other).unwrap();

        let kept = disjoint(vec![
            target("thumbnail-cache", thumbs.clone()),
            target(CUSTOM_CATEGORY, thumbs.clone()),
            target(CUSTOM_CATEGORY, cache.clone()),
            target(CUSTOM_CATEGORY, cache.join("thumbnails/.")),
            target(CUSTOM_CATEGORY, other.clone()),
        ]);

        let got: Vec<_> = kept.iter().map(|t| (t.category, t.path.clone())).collect();
        assert_eq!(got, vec![("thumbnail-cache", thumbs), (CUSTOM_CATEGORY, other)]);
    }

    #[test]
    fn nested_missing_paths_still_overlap() {
        let kept = disjoint(vec![
            target("a", PathBuf::from("/no/such/dir")),
            target("b", PathBuf::from("/no/such/dir/below")),
            target("c", PathBuf::from("/no/such/dirt")),
        ]);

        let names: Vec<_> = kept.iter().map(|t| t.category).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn profile_subdirs_finds_per_profile_caches() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(base.path().join("Default/Cache")).unwrap();
        std::fs::create_dir_all(base.path().join("Profile 1/Code Cache")).unwrap();
        std::fs::create_dir_all(base.path().join("Profile 2/Other")).unwrap();
        std::fs::write(base.path().join("Local State"), b"{}").unwrap();

        let dirs = profile_subdirs(base.path(), &["Cache", "Code Cache"]);

        assert_eq!(
            dirs,
            vec![
                base.path().join("Default/Cache"),
                base.path().join("Profile 1/Code Cache"),
            ]
        );
    }
}
