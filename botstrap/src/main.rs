mod cli;
mod commands;
mod env;
mod observability;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

use botstrap_core::config::PathsConfig;

fn main() -> Result<()> {
    // Snapshot before any config load pulls ./.env into the process env;
    // `check` must tell operator-set variables apart from file values.
    let real_env = commands::check::real_env_snapshot();
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Up {
            venv_dir,
            requirements,
            env_file,
            template,
            python,
            skip_install,
        } => {
            let paths = PathsConfig::from_env()
                .with_cli_overrides(venv_dir, requirements, env_file, template, python);
            commands::up::cmd_up(&paths, skip_install)?;
        }
        Commands::Check {
            venv_dir,
            env_file,
            python,
        } => {
            let paths =
                PathsConfig::from_env().with_cli_overrides(venv_dir, None, env_file, None, python);
            commands::check::cmd_check(&paths, &real_env)?;
        }
        Commands::Clean {
            venv_dir,
            dry_run,
            force,
        } => {
            let paths =
                PathsConfig::from_env().with_cli_overrides(venv_dir, None, None, None, None);
            commands::clean::cmd_clean(&paths.venv_dir, dry_run, force)?;
        }
    }

    Ok(())
}
