use std::cmp::Ordering;

use clap::{Parser, Subcommand, ValueEnum};
use stagever::{Intent, Version, VersionError};
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
enum StageverCliError {
    #[error("{0}")]
    LibraryError(#[from] VersionError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum IntentArg {
    Patch,
    Minor,
    Major,
    Alpha,
    Beta,
    Rc,
    Stable,
    Next,
}

impl IntentArg {
    fn to_intent(self) -> Intent {
        match self {
            IntentArg::Patch => Intent::Patch,
            IntentArg::Minor => Intent::Minor,
            IntentArg::Major => Intent::Major,
            IntentArg::Alpha => Intent::Alpha,
            IntentArg::Beta => Intent::Beta,
            IntentArg::Rc => Intent::Rc,
            IntentArg::Stable => Intent::Stable,
            IntentArg::Next => Intent::Next,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when `RUST_LOG` is not set, e.g. `debug` or `stagever=trace`.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates a version and prints its canonical form
    Valid {
        /// The version string to validate
        version: String,
    },

    /// Lists the versions that may be released after `VERSION`, one per line, from the smallest
    /// change to the largest.
    Candidates {
        /// The current version
        version: String,
    },

    /// Prints the version produced by applying `INTENT` to `VERSION`.
    Bump {
        /// The current version
        version: String,

        /// The kind of release to make
        #[arg(value_enum)]
        intent: IntentArg,
    },

    /// Compares two versions, printing `<`, `=`, or `>`.
    Compare {
        /// The left-hand version
        left: String,

        /// The right-hand version
        right: String,
    },
}

type Output = (String, i32);

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // ignore the error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    tracing::debug!(?cli, "parsed arguments");

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, StageverCliError> {
    match cli.command {
        Commands::Valid { version } => {
            let version = Version::parse(&version)?;
            Ok((version.to_string(), 0))
        }
        Commands::Candidates { version } => {
            let candidates = Version::parse(&version)?
                .next_candidates()?
                .iter()
                .map(Version::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            Ok((candidates, 0))
        }
        Commands::Bump { version, intent } => {
            let next = Version::parse(&version)?.increase_by(intent.to_intent())?;
            Ok((next.to_string(), 0))
        }
        Commands::Compare { left, right } => {
            let symbol = match Version::parse(&left)?.cmp(&Version::parse(&right)?) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            Ok((symbol.to_string(), 0))
        }
    }
}
