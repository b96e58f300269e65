use anyhow::Result;
use clap::Parser;

use postfilter::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
