use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::config::Settings;
use crate::descriptor;
use crate::error::{LauncherError, Result};
use crate::model::{ExecMode, LauncherEntry};
use crate::prompt::Prompter;
use crate::resolve;

/// Asks every question, then writes the descriptor. Returns where it landed.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, settings: &Settings) -> Result<PathBuf> {
    run_with_chmod(prompter, settings, resolve::set_user_executable)
}

fn run_with_chmod<R, W, F>(prompter: &mut Prompter<R, W>, settings: &Settings, make_executable: F) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&Path) -> io::Result<()>,
{
    let mode = if settings.allow_command {
        prompter.say("Please choose whether you want to choose a path(1) or a command(2) as the 'Exec' parameter");
        prompter.ask_mode()?
    } else {
        ExecMode::Path
    };

    let exec = match mode {
        ExecMode::Path => {
            prompter.say("Please input path to the applications executable.");
            ask_executable_path(prompter, make_executable)?
        }
        ExecMode::Command => {
            prompter.say("Please input the command to be executed.");
            prompter.ask_exec()?
        }
    };

    prompter.say("Please input the applications name.");
    let name = prompter.ask_name()?;

    prompter.say("Please input the path to the applications icon. (Leave empty for none)");
    let icon = match prompter.ask_icon()? {
        Some(icon) => Some(absolute(&icon)?),
        None => None,
    };

    let mut entry = LauncherEntry::new(mode, exec, name);
    entry.icon = icon;

    let path = descriptor::output_path(&settings.applications_dir, &descriptor::file_stem(&entry));
    debug!("Descriptor for {:?} goes to {:?}", entry.name, path);
    descriptor::write(&path, &descriptor::render(&entry), settings.overwrite)?;

    prompter.say(&format!("Desktop file written to '{}'.", path.display()));
    Ok(path)
}

fn ask_executable_path<R, W, F>(prompter: &mut Prompter<R, W>, make_executable: F) -> Result<String>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&Path) -> io::Result<()>,
{
    let answer = prompter.ask_exec()?;
    let path = absolute(&answer)?;

    if !resolve::is_user_executable(&path)? {
        let question = format!("The file '{}' isn't executable, make it executable? (y/n)", path.display());
        if prompter.confirm(&question)? {
            if let Err(e) = make_executable(&path) {
                warn!("chmod on {:?} failed: {}", path, e);
                prompter.say(&format!("Couldn't set file permissions for '{}': {}", path.display(), e));
            }
        }
    }

    Ok(path.to_string_lossy().into_owned())
}

fn absolute(path: &str) -> Result<PathBuf> {
    resolve::absolutize(path).map_err(|source| LauncherError::Stat {
        path: PathBuf::from(path),
        source,
    })
}
