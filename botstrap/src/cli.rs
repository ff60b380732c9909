use clap::{Parser, Subcommand};

/// botstrap — one-command setup for the subscription bot
#[derive(Parser, Debug)]
#[command(name = "botstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare the working directory: venv, dependencies, .env (idempotent)
    ///
    /// Runs four steps in strict order and stops on the first failure:
    ///   1. Create venv/ if missing
    ///   2. Upgrade pip, install requirements.txt into the venv
    ///   3. Seed .env from .env.example if missing (never overwrites)
    ///   4. Print how to activate the environment and start the bot
    Up {
        /// Virtual environment directory (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Requirements manifest (default: requirements.txt)
        #[arg(long, value_name = "FILE")]
        requirements: Option<String>,

        /// Config file to seed (default: .env)
        #[arg(long, value_name = "FILE")]
        env_file: Option<String>,

        /// Template copied when the config file is missing (default: .env.example)
        #[arg(long, value_name = "FILE")]
        template: Option<String>,

        /// System Python used to create the venv (default: python3 from PATH)
        #[arg(long, value_name = "BIN")]
        python: Option<String>,

        /// Skip pip upgrade and dependency installation
        #[arg(long)]
        skip_install: bool,
    },

    /// Verify the prepared state: python, venv, and the .env keys the bot reads
    ///
    /// Exits non-zero when a required key (BOT_TOKEN, CHANNEL_ID) is missing
    /// or malformed. Real environment variables override .env values, the
    /// same way the bot reads them.
    Check {
        /// Virtual environment directory (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Config file to validate (default: .env)
        #[arg(long, value_name = "FILE")]
        env_file: Option<String>,

        /// System Python to probe (default: python3 from PATH)
        #[arg(long, value_name = "BIN")]
        python: Option<String>,
    },

    /// Remove the virtual environment directory
    Clean {
        /// Virtual environment directory (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}
