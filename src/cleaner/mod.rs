//! Cleanup engine: walk a directory, apply the age filter, delete or
//! simulate deletion, and report classified failures.
//!
//! The engine does no logging and holds no global state. Each call to
//! [`clean_directory`] only touches its own subtree and its own result, so
//! calls over disjoint trees can run in parallel.

pub mod error;
pub mod result;
pub mod walk;

pub use error::{classify, CleanError, ErrorKind};
pub use result::CleanResult;
pub use walk::clean_directory;
