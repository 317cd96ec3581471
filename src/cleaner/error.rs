use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Why a file could not be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PermissionDenied,
    NotFound,
    Locked,
    Timeout,
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::NotFound => "not found",
            ErrorKind::Locked => "locked",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// One classified file- or directory-level failure.
///
/// The raw error is shared so results can be cloned into both a
/// per-category breakdown and a grand total.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}: {source}", .path.display())]
pub struct CleanError {
    pub path: PathBuf,
    pub kind: ErrorKind,
    #[source]
    pub source: Arc<io::Error>,
}

/// Message fragments Windows uses for ERROR_SHARING_VIOLATION and friends.
const LOCKED_MARKERS: &[&str] = &["used by another process", "sharing violation"];

const TIMEOUT_MARKER: &str = "timeout";

/// Tag a raw filesystem error with its cause.
///
/// Structured kinds are checked first, then the message text, because some
/// platforms only report locking and timeouts as free text. First match wins,
/// so a permission error whose message also mentions a timeout stays
/// `PermissionDenied`. Best effort only.
pub fn classify(path: impl AsRef<Path>, err: io::Error) -> CleanError {
    let kind = classify_kind(&err);
    CleanError {
        path: path.as_ref().to_path_buf(),
        kind,
        source: Arc::new(err),
    }
}

fn classify_kind(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::PermissionDenied => return ErrorKind::PermissionDenied,
        io::ErrorKind::NotFound => return ErrorKind::NotFound,
        _ => {}
    }

    let msg = err.to_string();
    if LOCKED_MARKERS.iter().any(|m| msg.contains(m)) {
        ErrorKind::Locked
    } else if msg.contains(TIMEOUT_MARKER) || err.kind() == io::ErrorKind::TimedOut {
        ErrorKind::Timeout
    } else {
        ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_kind() {
        let ce = classify("/some/path", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(ce.kind, ErrorKind::PermissionDenied);
        assert_eq!(ce.path, PathBuf::from("/some/path"));
    }

    #[test]
    fn not_found_kind() {
        let ce = classify("/missing/file", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(ce.kind, ErrorKind::NotFound);
    }

    #[test]
    fn locked_messages() {
        let ce = classify("/a", io::Error::other("the file is used by another process"));
        assert_eq!(ce.kind, ErrorKind::Locked);

        let ce = classify("/b", io::Error::other("sharing violation on resource"));
        assert_eq!(ce.kind, ErrorKind::Locked);
    }

    #[test]
    fn locked_match_is_case_sensitive() {
        let ce = classify("/a", io::Error::other("Sharing Violation"));
        assert_eq!(ce.kind, ErrorKind::Other);
    }

    #[test]
    fn timeout_message_and_kind() {
        let ce = classify("/slow", io::Error::other("operation timeout"));
        assert_eq!(ce.kind, ErrorKind::Timeout);

        let ce = classify("/slow", io::Error::from(io::ErrorKind::TimedOut));
        assert_eq!(ce.kind, ErrorKind::Timeout);
    }

    #[test]
    fn structured_kind_wins_over_message() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "timeout while used by another process");
        assert_eq!(classify("/x", err).kind, ErrorKind::PermissionDenied);
    }

    #[test]
    fn locked_wins_over_timeout() {
        let err = io::Error::other("sharing violation after timeout");
        assert_eq!(classify("/x", err).kind, ErrorKind::Locked);
    }

    #[test]
    fn anything_else_is_other() {
        let ce = classify("/other", io::Error::other("some random failure"));
        assert_eq!(ce.kind, ErrorKind::Other);
    }

    #[test]
    fn renders_path_and_message() {
        let ce = CleanError {
            path: PathBuf::from("/test/path"),
            kind: ErrorKind::Other,
            source: Arc::new(io::Error::other("boom")),
        };
        assert_eq!(ce.to_string(), "/test/path: boom");
    }
}
