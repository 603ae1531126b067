use std::env;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Component, Path, PathBuf};
use log::debug;
use crate::error::{LauncherError, Result};

const USER_EXECUTE: u32 = 0o100;

/// Joins a relative path onto the working directory and cleans it.
/// No symlinks are followed.
pub fn absolutize(path: &str) -> io::Result<PathBuf> {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    let absolute = clean(&joined);
    debug!("Resolved {:?} to {:?}", path, absolute);
    Ok(absolute)
}

/// Lexically drops `.` and folds `..` into its parent; `..` never climbs
/// above the root.
fn clean(path: &Path) -> PathBuf {
    path.components().fold(PathBuf::new(), |mut out, component| {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.parent().is_some() {
                    out.pop();
                }
            }
            other => out.push(other),
        }
        out
    })
}

pub fn is_user_executable(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.permissions().mode() & USER_EXECUTE != 0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(LauncherError::MissingExecutable(path.to_path_buf()))
        }
        Err(source) => Err(LauncherError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Adds the owner execute bit, leaving the rest of the mode alone.
pub fn set_user_executable(path: &Path) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | USER_EXECUTE);
    fs::set_permissions(path, permissions)
}
