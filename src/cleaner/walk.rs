use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;

use super::error::classify;
use super::result::CleanResult;

/// Remove every regular file under `root` that is at least `max_age` old.
///
/// A zero `max_age` disables the age filter. With `dry_run` set nothing is
/// touched on disk but the result is counted exactly as a real run would.
/// A missing or unreadable root yields an empty result. Failures below the
/// root are classified into the result and never abort the walk.
pub fn clean_directory(root: &Path, max_age: Duration, dry_run: bool) -> CleanResult {
    clean_with(root, max_age, dry_run, |path| std::fs::remove_file(path))
}

fn clean_with<F>(root: &Path, max_age: Duration, dry_run: bool, mut remove: F) -> CleanResult
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut result = CleanResult::new();

    if std::fs::metadata(root).is_err() {
        return result;
    }

    let now = SystemTime::now();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // The root itself failing to list means it is unreadable.
                if e.depth() == 0 {
                    continue;
                }
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                result.record_traversal_failure(classify(path, walk_io_error(e)));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let meta = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                result.record_failure(classify(entry.path(), walk_io_error(e)));
                continue;
            }
        };

        if !max_age.is_zero() {
            let modified = match meta.modified() {
                Ok(t) => t,
                Err(e) => {
                    result.record_failure(classify(entry.path(), e));
                    continue;
                }
            };
            // Timestamps in the future count as brand new.
            let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
            if age < max_age {
                continue;
            }
        }

        let size = meta.len();

        if dry_run {
            result.record_removed(size);
            continue;
        }

        match remove(entry.path()) {
            Ok(()) => result.record_removed(size),
            Err(e) => result.record_failure(classify(entry.path(), e)),
        }
    }

    result
}

/// The OS error behind a walk failure, without walkdir's path prefix.
/// Loop errors carry no OS error and keep walkdir's own message.
fn walk_io_error(err: walkdir::Error) -> io::Error {
    let msg = err.to_string();
    err.into_io_error().unwrap_or_else(|| io::Error::other(msg))
}
