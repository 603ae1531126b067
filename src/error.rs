use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("input stream closed before an answer was given")]
    InputClosed,

    #[error("error reading answer: {0}")]
    ReadInput(#[source] io::Error),

    #[error("the file '{}' doesn't exist", .0.display())]
    MissingExecutable(PathBuf),

    #[error("error querying file '{}': {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to determine the current user's home directory")]
    NoHome,

    #[error("a desktop file already exists at '{}'", .0.display())]
    AlreadyExists(PathBuf),

    #[error("error writing desktop file at '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LauncherError>;
