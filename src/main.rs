use clap::Parser;
use envcmp::config::{Cli, Command};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    info!("STARTED envcmp v{}", envcmp::VERSION);

    match cli.command {
        Command::Run {
            env_left,
            env_right,
            name_dir,
        } => {
            envcmp::commands::run::run(&env_left, &env_right, &name_dir)?;
        }
    }

    Ok(())
}
