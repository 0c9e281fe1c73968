use clap::Parser;
use cncquote::cli::Cli;
use cncquote::{commands, init_logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.global.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &mut out)
}
