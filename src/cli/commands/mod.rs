use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod config;
pub mod version;

#[derive(Parser)]
#[command(
    name = "postfilter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decide whether Mastodon statuses are shown, shown with a warning, or hidden",
    long_about = "postfilter applies a user's content filters to statuses: version 1 keyword \
                  phrases matched locally, or the version 2 results the server attached to each status."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply filters to a file of statuses
    Check(check::CheckArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Check(args)) => {
                check::execute(args, self.config.as_deref(), self.verbose > 0, self.quiet)
            }
            Some(Commands::Config(args)) => config::execute(args, self.config.as_deref()),
            Some(Commands::Version(args)) => version::execute(args),
            None => {
                println!("Run 'postfilter --help' for usage information");
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs go to stderr so JSON reports on stdout stay parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
