use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syscleaner::categories::{self, CleanTarget};
use syscleaner::cli::{Cli, Command, TargetArgs};
use syscleaner::config::{self, Config};
use syscleaner::runner::Runner;
use syscleaner::{disk_info, output, utils};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Scan(args) => clean(&args, true, cli.verbose),
        Command::Clean { confirm, targets } => {
            if !confirm {
                output::print_no_confirm_warning();
            }
            clean(&targets, !confirm, cli.verbose)
        }
        Command::Categories => list_categories(),
        Command::Config { init } => show_config(init),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "syscleaner=warn",
        1 => "syscleaner=info",
        _ => "syscleaner=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn select_targets(args: &TargetArgs, config: &Config) -> Result<Vec<CleanTarget>> {
    let overrides = config.age_overrides().context("Invalid max_age_overrides in config")?;

    let mut targets = if !args.categories.is_empty() {
        let mut selected = Vec::new();
        for name in &args.categories {
            match categories::find_category(name) {
                Some(category) => selected.push(category),
                None => bail!(
                    "Unknown category '{name}'. Available: {}",
                    categories::all_category_names().join(", ")
                ),
            }
        }
        categories::targets_for(&selected, &overrides)
    } else if args.paths.is_empty() {
        categories::resolve_targets(&config.default_clean_options, &overrides)
    } else {
        Vec::new()
    };

    if let Some(age) = args.max_age {
        for target in &mut targets {
            target.max_age = age;
        }
    }

    targets.extend(categories::custom_targets(
        &args.paths,
        args.max_age.unwrap_or_default(),
    ));
    Ok(categories::disjoint(targets))
}

fn clean(args: &TargetArgs, dry_run: bool, verbose: u8) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Using profile '{}'", config.active_profile);

    let config_dry_run = config.default_clean_options.dry_run;
    if config_dry_run && !dry_run {
        output::print_config_dry_run_warning();
    }
    let dry_run = dry_run || config_dry_run;

    let targets = select_targets(args, &config)?;

    output::print_banner();
    if targets.is_empty() {
        output::print_info("Nothing to clean: no selected category has directories on this machine.");
        return Ok(());
    }

    let disk_root = Path::new("/");
    let before = disk_info::get_disk_info(disk_root);
    if let Some(info) = &before {
        output::print_disk_space("Disk", info);
        println!();
    }

    let runner = Runner::with_system_probe(&config.process_whitelist);
    let report = runner.run(&targets, dry_run);

    output::print_report(&report, args.show_errors || verbose > 0);

    if dry_run {
        output::print_dry_run_footer();
    } else {
        output::print_clean_complete(&utils::format_size(report.total.space_freed));
        if let Some(after) = disk_info::get_disk_info(disk_root) {
            output::print_disk_space("Disk now", &after);
        }
    }

    Ok(())
}

fn list_categories() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let overrides = config.age_overrides().context("Invalid max_age_overrides in config")?;

    output::print_banner();
    for category in categories::all_categories() {
        output::print_category_header(
            category.name(),
            category.label(),
            category.enabled(&config.default_clean_options),
        );
        let age = overrides
            .get(category.name())
            .copied()
            .unwrap_or_else(|| category.max_age());
        let dirs = category.directories();
        if dirs.is_empty() {
            output::print_no_directories();
        }
        for dir in dirs {
            output::print_directory(&utils::display_path(&dir), &utils::format_age(age));
        }
        println!();
    }
    Ok(())
}

fn show_config(init: bool) -> Result<()> {
    let path = config::config_path()?;

    if init && !path.exists() {
        let written = Config::default()
            .save()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        output::print_info(&format!("Wrote default config to {}", written.display()));
    }

    let config = Config::load_from(&path)?;
    output::print_info(&format!("Config file: {}", path.display()));
    println!();
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
