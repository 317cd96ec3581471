use colored::Colorize;

use crate::cleaner::{CleanError, CleanResult};
use crate::disk_info::DiskInfo;
use crate::runner::{CategoryReport, CleanReport};
use crate::utils::{display_path, format_size};

pub fn print_banner() {
    println!(
        "{}",
        concat!("syscleaner v", env!("CARGO_PKG_VERSION"))
            .bold()
            .cyan()
    );
    println!();
}

pub fn print_category_header(name: &str, label: &str, default_on: bool) {
    let state = if default_on {
        "[on]".green()
    } else {
        "[off]".dimmed()
    };
    println!("{} {} {}", label.bold().white(), format!("({name})").dimmed(), state);
}

pub fn print_directory(path: &str, age: &str) {
    println!("  {}  {}", path.dimmed(), age.yellow());
}

pub fn print_no_directories() {
    println!("  {}", "no directories on this machine".dimmed());
}

pub fn print_summary_header(dry_run: bool) {
    let title = if dry_run {
        "=== Reclaimable (dry run) ==="
    } else {
        "=== Cleaned ==="
    };
    println!("{}", title.bold().white());
}

pub fn print_category_row(report: &CategoryReport) {
    if let Some(reason) = &report.skipped_reason {
        println!(
            "  {:<30} {}",
            report.label,
            format!("[skipped: {reason}]").yellow()
        );
        return;
    }
    let r = &report.result;
    let failures = if r.has_failures() {
        format!("  {} failed", r.failed_files()).red().to_string()
    } else {
        String::new()
    };
    println!(
        "  {:<30} {:>12}  {}{}",
        report.label,
        format_size(r.space_freed).green(),
        format!("{} files", r.files_deleted).dimmed(),
        failures
    );
}

pub fn print_separator() {
    println!("  {}", "─".repeat(55).dimmed());
}

pub fn print_total(total: &CleanResult) {
    println!(
        "  {:<30} {:>12}  {}",
        "Total:".bold(),
        format_size(total.space_freed).green().bold(),
        format!("{} files", total.files_deleted).bold()
    );
    println!();
}

/// "N files skipped: M locked, K permission-denied"
pub fn failure_summary(result: &CleanResult) -> String {
    format!(
        "{} files skipped: {} locked, {} permission-denied",
        result.failed_files(),
        result.locked_files,
        result.permission_files
    )
}

pub fn print_failures(result: &CleanResult) {
    if !result.has_failures() {
        return;
    }
    println!("{} {}", "Warning:".red().bold(), failure_summary(result).red());
}

pub fn print_errors(errors: &[CleanError]) {
    for err in errors {
        println!(
            "  {} {} — {}",
            format!("[{}]", err.kind).red().bold(),
            display_path(&err.path).dimmed(),
            err.source.to_string().red()
        );
    }
    if !errors.is_empty() {
        println!();
    }
}

pub fn print_disk_space(label: &str, info: &DiskInfo) {
    println!(
        "{} {} free of {} ({:.0}% used)",
        format!("{label}:").cyan().bold(),
        format_size(info.available),
        format_size(info.total),
        info.usage_percent() * 100.0
    );
}

pub fn print_report(report: &CleanReport, show_errors: bool) {
    print_summary_header(report.dry_run);
    for category in &report.categories {
        print_category_row(category);
    }
    print_separator();
    print_total(&report.total);
    print_failures(&report.total);
    if show_errors {
        print_errors(&report.total.errors);
    }
}

pub fn print_info(msg: &str) {
    println!("{} {}", "Info:".cyan().bold(), msg);
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Run `syscleaner clean --confirm` to delete."
            .yellow()
            .bold()
    );
}

pub fn print_clean_complete(freed: &str) {
    println!(
        "{} {}",
        "Cleaned!".green().bold(),
        format!("{freed} freed.").green()
    );
}

pub fn print_no_confirm_warning() {
    println!(
        "{}",
        "No --confirm flag provided. Running as dry-run scan."
            .yellow()
            .bold()
    );
    println!();
}

pub fn print_config_dry_run_warning() {
    println!(
        "{}",
        "dry_run is set in the config file. Running as dry-run scan."
            .yellow()
            .bold()
    );
    println!();
}
