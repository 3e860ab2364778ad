//! KMC CLI - Command line tool for Kopcoat mix weights and cost.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kmc-cli",
    version,
    about = "514 Kopcoat mix calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: kmc_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("kmc-cli {}", env!("CARGO_PKG_VERSION"));
    kmc_cmd::run(cli.command)
}
