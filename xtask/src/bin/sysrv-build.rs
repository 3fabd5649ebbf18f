use anyhow::Result;
use clap::Parser;
use sysrv_xtask::cli::BuildCli;

fn main() -> Result<()> {
    let cli = BuildCli::parse();
    sysrv_xtask::logging::init(cli.verbose);
    sysrv_xtask::app::build(cli.into_request())
}
