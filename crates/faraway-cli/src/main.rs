// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;

use anyhow::{Context, Result};
use config::{Config, SeedList};
use faraway_app::{AppCommand, AppState, PackingList, SortOrder};
use faraway_testkit::TripFaker;
use faraway_tui::UiOptions;
use std::env;
use std::path::PathBuf;
use tracing::info;

const DEMO_SEED: u64 = 42;
const DEMO_ITEMS: usize = 24;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `faraway --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;
    let ui_options = UiOptions {
        default_quantity: config.default_quantity(),
        status_timeout: config.status_timeout()?,
    };
    let log_path = config.log_path()?;
    if options.check_only {
        return Ok(());
    }

    logging::init(&log_path, config.log_level()).with_context(|| {
        format!(
            "set up logging at {} -- if this path is wrong, set [log].file",
            log_path.display()
        )
    })?;

    let start = start_list(&options, &config);
    info!(
        config = %options.config_path.display(),
        items = start.len(),
        "starting faraway"
    );
    let mut state = initial_state(start, config.default_sort());
    faraway_tui::run_app(&mut state, ui_options)
}

fn start_list(options: &CliOptions, config: &Config) -> PackingList {
    if options.demo {
        return TripFaker::new(DEMO_SEED).packing_list(DEMO_ITEMS);
    }
    if options.empty {
        return PackingList::new();
    }
    match config.seed() {
        SeedList::Default => PackingList::seeded(),
        SeedList::Empty => PackingList::new(),
    }
}

fn initial_state(list: PackingList, sort: SortOrder) -> AppState {
    let mut state = AppState::with_list(list);
    if sort != SortOrder::Input {
        state.dispatch(AppCommand::Reorder(sort));
        state.dispatch(AppCommand::ClearStatus);
    }
    state
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    demo: bool,
    empty: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        demo: false,
        empty: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--empty" => {
                options.empty = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    if options.demo && options.empty {
        return Err(anyhow::anyhow!("--demo and --empty cannot be combined"));
    }

    Ok(options)
}

fn print_help() {
    println!("faraway - packing list for your next trip");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Start with a generated demo list");
    println!("  --empty                  Start with an empty list");
    println!("  --check                  Validate config and exit");
    println!("  --help                   Show this help");
}
