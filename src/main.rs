use std::ffi::OsString;

use clap::{
    error::ErrorKind, parser::ValueSource, ArgAction, CommandFactory, FromArgMatches, Parser,
    Subcommand,
};
use selsort_mini::{BenchArgs, DemoArgs};
use tracing::Level;

// Ids of the flattened `DemoArgs` flags. They only mean something when no subcommand is given.
const DEMO_ARGS: [&str; 3] = ["size", "max_value", "seed"];

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Option<Commands>,

    #[command(flatten)]
    demo: DemoArgs,

    /// Log more detail to stderr. Repeat for more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the comparisons and time taken by every selection sort variant
    Bench(BenchArgs),
}

impl Cli {
    /// Parses `args`, rejecting demo flags that were given together with a subcommand.
    fn try_parse_checked<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let matches = command.try_get_matches_from_mut(args)?;

        if let Some((name, _)) = matches.subcommand() {
            let given = DEMO_ARGS
                .into_iter()
                .find(|id| matches.value_source(id) == Some(ValueSource::CommandLine));
            if let Some(id) = given {
                return Err(command.error(
                    ErrorKind::ArgumentConflict,
                    format!(
                        "'--{}' only applies to the demo and cannot be used with '{name}'",
                        id.replace('_', "-")
                    ),
                ));
            }
        }

        Self::from_arg_matches(&matches)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse_checked(std::env::args_os()).unwrap_or_else(|err| err.exit());

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.commands {
        Some(Commands::Bench(bench_args)) => bench_args.run(),
        None => cli.demo.run(),
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    Cli::command().debug_assert()
}

#[test]
fn no_arguments_runs_the_demo() {
    let cli = Cli::try_parse_checked(["selsort"]).unwrap();
    assert!(cli.commands.is_none());
    assert_eq!(cli.verbose, 0);
}

#[test]
fn bench_subcommand_parses() {
    let cli = Cli::try_parse_checked(["selsort", "bench", "--max-size", "50", "-vv"]).unwrap();
    assert!(matches!(cli.commands, Some(Commands::Bench(_))));
    assert_eq!(log_level(cli.verbose), Level::DEBUG);
}

#[test]
fn verbosity_before_the_subcommand() {
    let cli = Cli::try_parse_checked(["selsort", "-vv", "bench"]).unwrap();
    assert!(matches!(cli.commands, Some(Commands::Bench(_))));
    assert_eq!(log_level(cli.verbose), Level::DEBUG);

    let cli = Cli::try_parse_checked(["selsort", "-v", "bench", "--max-size", "5"]).unwrap();
    assert!(matches!(cli.commands, Some(Commands::Bench(_))));
    assert_eq!(log_level(cli.verbose), Level::INFO);
}

#[test]
fn verbosity_with_the_demo() {
    let cli = Cli::try_parse_checked(["selsort", "-vvv", "--size", "4", "--seed", "1"]).unwrap();
    assert!(cli.commands.is_none());
    assert_eq!(log_level(cli.verbose), Level::TRACE);
}

#[test]
fn demo_flags_are_rejected_with_bench() {
    for flags in [
        ["selsort", "--size", "4", "bench"],
        ["selsort", "--max-value", "9", "bench"],
        ["selsort", "--seed", "3", "bench"],
    ] {
        let err = Cli::try_parse_checked(flags).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    // `--seed` after the subcommand belongs to `bench`.
    assert!(Cli::try_parse_checked(["selsort", "bench", "--seed", "3"]).is_ok());
}

#[test]
fn zero_max_value_is_rejected() {
    assert!(Cli::try_parse_checked(["selsort", "--max-value", "0"]).is_err());
}
