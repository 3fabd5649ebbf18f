use anyhow::Result;
use clap::Parser;
use sysrv_xtask::cli::RunCli;

fn main() -> Result<()> {
    let cli = RunCli::parse();
    sysrv_xtask::logging::init(cli.verbose);
    sysrv_xtask::app::run(cli.into_request())
}
