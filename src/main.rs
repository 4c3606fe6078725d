use anyhow::Result;
use clap::Parser;
use contribsim::cli::Cli;
use contribsim::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    cli.execute()
}
