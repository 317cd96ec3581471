//! Disk-space reclamation: remove aged files from temp folders, caches and
//! logs, and report classified failures instead of aborting.

pub mod categories;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod disk_info;
pub mod output;
pub mod runner;
pub mod utils;

pub use cleaner::{classify, clean_directory, CleanError, CleanResult, ErrorKind};
pub use utils::format_size;
