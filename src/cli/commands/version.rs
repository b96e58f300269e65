use anyhow::Result;
use clap::Args;

#[derive(Args, Default)]
pub struct VersionArgs {
    /// Show detailed version information
    #[arg(short = 'd', long = "detailed")]
    pub detailed: bool,
}

pub fn execute(args: VersionArgs) -> Result<()> {
    println!("{} {}", crate::PKG_NAME, crate::VERSION);

    if args.detailed {
        println!("Description: {}", crate::PKG_DESCRIPTION);
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Filter contexts: home, notifications, public, thread, account");
    }
    Ok(())
}
