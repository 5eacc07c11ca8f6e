//! Argument parsing and dispatch

use crate::commands::{self, PercentEdit};
use crate::config::CliConfig;
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use gt_core::PercentTriple;
use gt_store::{seed_demo_data, MemoryStore};
use std::path::PathBuf;

/// Build the command tree
#[must_use]
pub fn build_cli() -> Command {
    Command::new("givetransparent")
        .version(gt_core::VERSION)
        .about("Preview donation splits, fees and payout reports")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write logs as JSON lines"),
        )
        .subcommand(
            Command::new("preview")
                .about("Fee lines and pillar amounts for a plan")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .default_value("30")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Gross monthly amount in pounds"),
                )
                .arg(
                    Arg::new("snap")
                        .long("snap")
                        .action(ArgAction::SetTrue)
                        .help("Fit the amount to the slider bounds"),
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(PercentEdit))
                        .help("Edit a pillar, e.g. --set environment=20; applied in order"),
                ),
        )
        .subcommand(
            Command::new("rebalance")
                .about("Rebalance a split after editing one pillar")
                .arg(percent_arg("environment", "40"))
                .arg(percent_arg("human-aid", "35"))
                .arg(percent_arg("research", "25"))
                .arg(
                    Arg::new("edit")
                        .required(true)
                        .value_parser(value_parser!(PercentEdit))
                        .help("<pillar>=<percent>"),
                ),
        )
        .subcommand(
            Command::new("receipt")
                .about("Render a payment receipt")
                .arg(Arg::new("id").help("Payment id; the latest payment if omitted")),
        )
        .subcommand(
            Command::new("report")
                .about("Render a quarterly payout report")
                .arg(
                    Arg::new("quarter")
                        .required(true)
                        .value_parser(["Q1", "Q2", "Q3", "Q4"])
                        .help("Quarter"),
                )
                .arg(
                    Arg::new("year")
                        .required(true)
                        .value_parser(value_parser!(i32))
                        .help("Year"),
                ),
        )
        .subcommand(Command::new("stats").about("All-time donation statistics"))
}

fn percent_arg(name: &'static str, default: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .default_value(default)
        .value_parser(value_parser!(u32))
        .help("Current percentage before the edit")
}

/// Whether a global flag such as `verbose` was given, before or after the subcommand
#[must_use]
pub fn global_flag(matches: &ArgMatches, name: &str) -> bool {
    match matches.subcommand() {
        Some((_, args)) => args.get_flag(name),
        None => matches.get_flag(name),
    }
}

/// Load configuration, seed a store and run the chosen subcommand
///
/// # Errors
/// Configuration or command failures.
pub fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("no command given");
    };
    // Global args propagate down, so the subcommand sees --config wherever it was given.
    let config =
        CliConfig::load_or_default(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let store = MemoryStore::new();
    seed_demo_data(&store)?;

    match name {
        "preview" => {
            let amount = args
                .get_one::<f64>("amount")
                .copied()
                .unwrap_or(gt_core::DEFAULT_AMOUNT);
            let edits: Vec<PercentEdit> = args
                .get_many::<PercentEdit>("set")
                .unwrap_or_default()
                .cloned()
                .collect();
            commands::preview(&config, amount, args.get_flag("snap"), &edits)
        }
        "rebalance" => {
            let percent = |name: &str| args.get_one::<u32>(name).copied().unwrap_or_default();
            let current = PercentTriple::new(
                percent("environment"),
                percent("human-aid"),
                percent("research"),
            );
            let edit = args
                .get_one::<PercentEdit>("edit")
                .context("missing <pillar>=<percent>")?;
            commands::rebalance(current, edit)
        }
        "receipt" => {
            commands::receipt(&store, &config, args.get_one::<String>("id").map(String::as_str))
        }
        "report" => {
            let quarter = args.get_one::<String>("quarter").context("missing quarter")?;
            let year = *args.get_one::<i32>("year").context("missing year")?;
            commands::report(&store, quarter, year)
        }
        "stats" => commands::stats(&store),
        other => anyhow::bail!("unknown command {other}"),
    }
}
