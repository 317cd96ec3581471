//! Runs the cleanup engine over many targets and folds the results.

use rayon::prelude::*;
use std::collections::HashSet;
use std::time::Instant;

use crate::categories::{self, CleanTarget};
use crate::cleaner::{clean_directory, CleanResult};

/// Source of the names of currently running processes.
pub trait ProcessProbe: Send + Sync {
    fn running_processes(&self) -> HashSet<String>;
}

/// Live process list from the operating system.
pub struct SystemProbe;

impl ProcessProbe for SystemProbe {
    fn running_processes(&self) -> HashSet<String> {
        use sysinfo::{ProcessesToUpdate, System};
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);
        sys.processes()
            .values()
            .map(|p| normalize_process_name(&p.name().to_string_lossy()))
            .collect()
    }
}

/// A fixed process list, for callers that already know what is running.
pub struct StaticProbe(pub HashSet<String>);

impl StaticProbe {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(names.into_iter().map(|n| normalize_process_name(n.as_ref())).collect())
    }
}

impl ProcessProbe for StaticProbe {
    fn running_processes(&self) -> HashSet<String> {
        self.0.clone()
    }
}

/// Lowercase and drop a trailing ".exe" so "Chrome.EXE" matches "chrome".
pub fn normalize_process_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    match lower.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => lower,
    }
}

/// Outcome for one category.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub name: &'static str,
    pub label: &'static str,
    pub result: CleanResult,
    /// Set when the whole category was left alone.
    pub skipped_reason: Option<String>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// In order of first appearance in the target list.
    pub categories: Vec<CategoryReport>,
    /// All target results folded in target order.
    pub total: CleanResult,
    pub dry_run: bool,
}

pub struct Runner<P: ProcessProbe> {
    whitelist: HashSet<String>,
    probe: P,
}

impl Runner<SystemProbe> {
    pub fn with_system_probe(whitelist: &[String]) -> Self {
        Self::new(whitelist, SystemProbe)
    }
}

impl<P: ProcessProbe> Runner<P> {
    pub fn new(whitelist: &[String], probe: P) -> Self {
        Self {
            whitelist: whitelist.iter().map(|n| normalize_process_name(n)).collect(),
            probe,
        }
    }

    /// Why `category` must be skipped, if one of its whitelisted owners is running.
    fn guard(&self, category: &str, running: &HashSet<String>) -> Option<String> {
        let owners = categories::find_category(category)?.owner_processes();
        owners
            .iter()
            .map(|o| normalize_process_name(o))
            .find(|o| self.whitelist.contains(o) && running.contains(o))
            .map(|o| format!("{o} is running"))
    }

    /// Clean every target and fold the results.
    ///
    /// Targets run in parallel, but results are folded in the order the
    /// targets were given, so the error list is reproducible.
    pub fn run(&self, targets: &[CleanTarget], dry_run: bool) -> CleanReport {
        let started = Instant::now();

        let running = if self.whitelist.is_empty() {
            HashSet::new()
        } else {
            self.probe.running_processes()
        };

        let mut categories: Vec<CategoryReport> = Vec::new();
        for target in targets {
            if categories.iter().any(|c| c.name == target.category) {
                continue;
            }
            let skipped_reason = self.guard(target.category, &running);
            if let Some(reason) = &skipped_reason {
                tracing::warn!("Skipping {}: {}", target.label, reason);
            }
            categories.push(CategoryReport {
                name: target.category,
                label: target.label,
                result: CleanResult::new(),
                skipped_reason,
            });
        }

        let skipped: HashSet<&str> = categories
            .iter()
            .filter(|c| c.skipped_reason.is_some())
            .map(|c| c.name)
            .collect();

        let results: Vec<Option<CleanResult>> = targets
            .par_iter()
            .map(|target| {
                if skipped.contains(target.category) {
                    return None;
                }
                tracing::debug!(
                    "Cleaning {} (max age {:?}, dry run {})",
                    target.path.display(),
                    target.max_age,
                    dry_run
                );
                let result = clean_directory(&target.path, target.max_age, dry_run);
                tracing::debug!(
                    "Finished {}: {} files, {} bytes, {} failures",
                    target.path.display(),
                    result.files_deleted,
                    result.space_freed,
                    result.errors.len()
                );
                Some(result)
            })
            .collect();

        let mut total = CleanResult::new();
        for (target, result) in targets.iter().zip(results) {
            let Some(result) = result else { continue };
            if let Some(report) = categories.iter_mut().find(|c| c.name == target.category) {
                report.result.merge(result.clone());
            }
            total.merge(result);
        }

        tracing::info!(
            "Cleaned {} targets in {:.2?}: {} files, {} bytes, {} failures",
            targets.len(),
            started.elapsed(),
            total.files_deleted,
            total.space_freed,
            total.errors.len()
        );

        CleanReport {
            categories,
            total,
            dry_run,
        }
    }
}
