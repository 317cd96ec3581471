use super::error::{CleanError, ErrorKind};

/// Additive summary of one or more directory cleans.
///
/// Counters merge commutatively. `errors` is concatenated, so the order of
/// failures depends on the order results are merged in.
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Files removed, or that would be removed in a dry run.
    pub files_deleted: u64,
    /// Files left in place after a timeout, not-found or unclassified failure,
    /// plus directories the walk could not descend into.
    pub skipped_files: u64,
    /// Bytes reclaimed, or that would be reclaimed in a dry run.
    pub space_freed: u64,
    pub locked_files: u64,
    pub permission_files: u64,
    pub errors: Vec<CleanError>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: CleanResult) {
        self.files_deleted += other.files_deleted;
        self.skipped_files += other.skipped_files;
        self.space_freed += other.space_freed;
        self.locked_files += other.locked_files;
        self.permission_files += other.permission_files;
        self.errors.extend(other.errors);
    }

    pub fn merged(mut self, other: CleanResult) -> Self {
        self.merge(other);
        self
    }

    pub(crate) fn record_removed(&mut self, size: u64) {
        self.files_deleted += 1;
        self.space_freed += size;
    }

    /// Count a failure against the counter for its kind and keep the record.
    pub(crate) fn record_failure(&mut self, err: CleanError) {
        match err.kind {
            ErrorKind::Locked => self.locked_files += 1,
            ErrorKind::PermissionDenied => self.permission_files += 1,
            ErrorKind::NotFound | ErrorKind::Timeout | ErrorKind::Other => {
                self.skipped_files += 1
            }
        }
        self.errors.push(err);
    }

    /// A directory that could not be listed. Its files were never seen, so it
    /// counts as skipped whatever the cause.
    pub(crate) fn record_traversal_failure(&mut self, err: CleanError) {
        self.skipped_files += 1;
        self.errors.push(err);
    }

    pub fn failed_files(&self) -> u64 {
        self.skipped_files + self.locked_files + self.permission_files
    }

    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty() || self.failed_files() > 0
    }

    /// True when nothing was visited that counts.
    pub fn is_empty(&self) -> bool {
        self.files_deleted == 0
            && self.space_freed == 0
            && self.failed_files() == 0
            && self.errors.is_empty()
    }
}

impl FromIterator<CleanResult> for CleanResult {
    fn from_iter<I: IntoIterator<Item = CleanResult>>(iter: I) -> Self {
        iter.into_iter().fold(CleanResult::new(), CleanResult::merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::error::classify;
    use std::io;

    fn result(counts: [u64; 5], errors: &[&str]) -> CleanResult {
        CleanResult {
            files_deleted: counts[0],
            skipped_files: counts[1],
            space_freed: counts[2],
            locked_files: counts[3],
            permission_files: counts[4],
            errors: errors
                .iter()
                .map(|p| classify(p, io::Error::other("boom")))
                .collect(),
        }
    }

    fn counters(r: &CleanResult) -> [u64; 5] {
        [
            r.files_deleted,
            r.skipped_files,
            r.space_freed,
            r.locked_files,
            r.permission_files,
        ]
    }

    fn paths(r: &CleanResult) -> Vec<String> {
        r.errors.iter().map(|e| e.path.display().to_string()).collect()
    }

    #[test]
    fn merge_adds_fields() {
        let mut a = result([5, 1, 1000, 1, 0], &["err1"]);
        let b = result([3, 2, 500, 0, 1], &["err2"]);

        a.merge(b);

        assert_eq!(counters(&a), [8, 3, 1500, 1, 1]);
        assert_eq!(a.errors.len(), 2);
    }

    #[test]
    fn merge_is_associative_and_commutative_on_counters() {
        let abc_left = result([1, 2, 3, 4, 5], &["a"])
            .merged(result([10, 20, 30, 40, 50], &["b"]))
            .merged(result([7, 0, 9, 1, 2], &["c"]));
        let abc_right = result([1, 2, 3, 4, 5], &["a"])
            .merged(result([10, 20, 30, 40, 50], &["b"]).merged(result([7, 0, 9, 1, 2], &["c"])));
        let bac = result([10, 20, 30, 40, 50], &["b"])
            .merged(result([1, 2, 3, 4, 5], &["a"]))
            .merged(result([7, 0, 9, 1, 2], &["c"]));

        assert_eq!(counters(&abc_left), counters(&abc_right));
        assert_eq!(counters(&abc_left), counters(&bac));
        assert_eq!(paths(&abc_left), paths(&abc_right));
    }

    #[test]
    fn error_order_follows_merge_order() {
        let ab = result([0; 5], &["a1", "a2"]).merged(result([0; 5], &["b1"]));
        let ba = result([0; 5], &["b1"]).merged(result([0; 5], &["a1", "a2"]));

        assert_eq!(paths(&ab), ["a1", "a2", "b1"]);
        assert_eq!(paths(&ba), ["b1", "a1", "a2"]);
    }

    #[test]
    fn collect_folds_in_iteration_order() {
        let total: CleanResult = vec![
            result([1, 0, 10, 0, 0], &["x"]),
            result([2, 1, 20, 0, 0], &["y", "z"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(counters(&total), [3, 1, 30, 0, 0]);
        assert_eq!(paths(&total), ["x", "y", "z"]);
    }

    #[test]
    fn record_failure_routes_by_kind() {
        let mut r = CleanResult::new();
        r.record_failure(classify("/l", io::Error::other("used by another process")));
        r.record_failure(classify("/p", io::Error::from(io::ErrorKind::PermissionDenied)));
        r.record_failure(classify("/n", io::Error::from(io::ErrorKind::NotFound)));
        r.record_failure(classify("/t", io::Error::other("timeout")));

        assert_eq!(r.locked_files, 1);
        assert_eq!(r.permission_files, 1);
        assert_eq!(r.skipped_files, 2);
        assert_eq!(r.errors.len(), 4);
        assert_eq!(r.failed_files(), 4);
        assert!(r.has_failures());
    }

    #[test]
    fn traversal_failures_count_as_skipped() {
        let mut r = CleanResult::new();
        r.record_traversal_failure(classify("/d", io::Error::from(io::ErrorKind::PermissionDenied)));
        r.record_traversal_failure(classify("/e", io::Error::other("sharing violation")));

        assert_eq!(r.skipped_files, 2);
        assert_eq!(r.permission_files, 0);
        assert_eq!(r.locked_files, 0);
        assert_eq!(r.errors[0].kind, ErrorKind::PermissionDenied);
        assert_eq!(r.errors[1].kind, ErrorKind::Locked);
    }

    #[test]
    fn empty_result() {
        let r = CleanResult::new();
        assert!(r.is_empty());
        assert!(!r.has_failures());
    }
}
