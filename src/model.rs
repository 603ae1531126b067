use std::path::PathBuf;

/// What the `Exec=` value holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    Path,
    Command,
}

#[derive(Debug, Clone)]
pub struct LauncherEntry {
    pub mode: ExecMode,
    pub exec: String,          // Absolute path or raw shell command
    pub name: String,          // Display name, never empty
    pub icon: Option<PathBuf>, // Absolute icon path
}

impl LauncherEntry {
    pub fn new(mode: ExecMode, exec: String, name: String) -> Self {
        Self {
            mode,
            exec,
            name,
            icon: None,
        }
    }
}
