use clap::Parser;
use gaitview::cli::{Cli, Commands};
use gaitview::config::load_config;
use miette::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    miette::set_panic_hook();

    let args = Cli::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Heights(opts) => opts.render(&config),
        Commands::Odometry(opts) => opts.render(&config),
    }
}
