use clap::Parser;
use crossingbench::{Cli, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())?;

    Ok(())
}
