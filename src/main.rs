mod config;
mod descriptor;
mod error;
mod model;
mod prompt;
mod resolve;
mod wizard;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Result;
use clap::Parser;
use log::debug;
use crate::config::{Config, Settings, default_config_path, load_config};
use crate::prompt::Prompter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactively create a .desktop launcher", long_about = None)]
struct Args {
    /// Only accept a path to an executable, never a shell command
    #[arg(long)]
    path_only: bool,

    /// Directory to write the desktop file into
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Refuse to replace an existing desktop file
    #[arg(long)]
    no_overwrite: bool,

    /// Config file to read instead of the default one
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self, config: &Config) -> Result<Settings> {
        let applications_dir = match self.output_dir.as_ref().or(config.general.applications_dir.as_ref()) {
            Some(dir) => dir.clone(),
            None => descriptor::default_applications_dir()?,
        };

        Ok(Settings {
            allow_command: config.general.allow_command && !self.path_only,
            overwrite: config.general.overwrite && !self.no_overwrite,
            applications_dir,
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    // 1. Load Config
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    let legacy_exit_status = config.general.legacy_exit_status;

    // 2. Ask and write
    match run(&args, &config) {
        Ok(path) => {
            debug!("Finished with {:?}", path);
            ExitCode::from(exit_status(true, legacy_exit_status))
        }
        Err(e) => {
            debug!("Run failed: {:?}", e);
            println!("Error: {:#}", e);
            ExitCode::from(exit_status(false, legacy_exit_status))
        }
    }
}

/// `legacy` reproduces the old behavior of exiting 0 even on failure.
fn exit_status(ok: bool, legacy: bool) -> u8 {
    if ok || legacy { 0 } else { 1 }
}

fn run(args: &Args, config: &Config) -> Result<PathBuf> {
    let settings = args.settings(config)?;
    debug!("Running with {:?}", settings);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    Ok(wizard::run(&mut prompter, &settings)?)
}
