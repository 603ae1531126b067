use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use directories::BaseDirs;
use log::{debug, info};
use regex::Regex;
use crate::error::{LauncherError, Result};
use crate::model::{ExecMode, LauncherEntry};

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^a-zA-Z0-9]+").expect("constant pattern")
});

const FALLBACK_STEM: &str = "launcher";

/// `<home>/.local/share/applications`
pub fn default_applications_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(LauncherError::NoHome)?;
    Ok(base_dirs
        .home_dir()
        .join(".local")
        .join("share")
        .join("applications"))
}

pub fn sanitize(name: &str) -> String {
    NON_ALPHANUMERIC.replace_all(name, "").into_owned()
}

/// File name (without extension) the descriptor is saved under.
pub fn file_stem(entry: &LauncherEntry) -> String {
    match entry.mode {
        ExecMode::Path => Path::new(&entry.exec)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_STEM.to_string()),
        ExecMode::Command => [&entry.name, &entry.exec]
            .into_iter()
            .map(|s| sanitize(s))
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_STEM.to_string()),
    }
}

pub fn output_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.desktop", stem))
}

pub fn render(entry: &LauncherEntry) -> String {
    let mut out = String::new();
    out.push_str("[Desktop Entry]\n");
    out.push_str("Type=Application\n");
    out.push_str("Terminal=False\n");
    if let Some(icon) = &entry.icon {
        let _ = writeln!(out, "Icon={}", icon.display());
    }
    let _ = writeln!(out, "Name={}", entry.name);
    let _ = writeln!(out, "Exec={}", entry.exec);
    out
}

/// Writes `contents` to `path`, creating the parent directory when needed.
pub fn write(path: &Path, contents: &str, overwrite: bool) -> Result<()> {
    let write_err = |source: io::Error| LauncherError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!("Creating applications directory {:?}", parent);
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(LauncherError::AlreadyExists(path.to_path_buf()));
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    info!("Wrote desktop file {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mode: ExecMode, exec: &str, name: &str) -> LauncherEntry {
        LauncherEntry::new(mode, exec.to_string(), name.to_string())
    }

    #[test]
    fn renders_without_icon() {
        let e = entry(ExecMode::Path, "/opt/app/run", "My App");
        assert_eq!(
            render(&e),
            "[Desktop Entry]\nType=Application\nTerminal=False\nName=My App\nExec=/opt/app/run\n"
        );
    }

    #[test]
    fn icon_goes_before_name() {
        let mut e = entry(ExecMode::Command, "echo hi", "Hi");
        e.icon = Some(PathBuf::from("/usr/share/icons/hi.png"));
        assert_eq!(
            render(&e),
            "[Desktop Entry]\nType=Application\nTerminal=False\nIcon=/usr/share/icons/hi.png\nName=Hi\nExec=echo hi\n"
        );
    }

    #[test]
    fn sanitize_strips_non_alphanumerics() {
        assert_eq!(sanitize("my cool cmd!"), "mycoolcmd");
        assert_eq!(sanitize("Äpp-2"), "pp2");
    }

    #[test]
    fn path_mode_uses_basename() {
        let e = entry(ExecMode::Path, "/usr/bin/foo", "Foo");
        let stem = file_stem(&e);
        assert_eq!(stem, "foo");
        assert_eq!(
            output_path(Path::new("/home/u/.local/share/applications"), &stem),
            PathBuf::from("/home/u/.local/share/applications/foo.desktop")
        );
    }

    #[test]
    fn command_mode_uses_sanitized_name() {
        let e = entry(ExecMode::Command, "firefox --private-window", "my cool cmd!");
        assert_eq!(file_stem(&e), "mycoolcmd");
    }

    #[test]
    fn command_mode_falls_back_when_name_sanitizes_away() {
        let e = entry(ExecMode::Command, "top -d 1", "!!!");
        assert_eq!(file_stem(&e), "topd1");

        let e = entry(ExecMode::Command, "***", "???");
        assert_eq!(file_stem(&e), "launcher");
    }

    #[test]
    fn default_dir_is_under_home() {
        let dir = default_applications_dir().unwrap();
        assert!(dir.ends_with(".local/share/applications"));
    }

    #[test]
    fn write_creates_parent_and_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("applications").join("foo.desktop");

        write(&path, "old\n", true).unwrap();
        write(&path, "new\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn write_refuses_existing_without_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("foo.desktop");
        fs::write(&path, "keep\n").unwrap();

        let err = write(&path, "new\n", false).unwrap_err();
        assert!(matches!(err, LauncherError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep\n");
    }

    #[test]
    fn write_error_names_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the directory should be.
        let blocker = tmp.path().join("applications");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("foo.desktop");

        let err = write(&path, "x", true).unwrap_err();
        assert!(matches!(err, LauncherError::Write { .. }));
        assert!(err.to_string().contains("foo.desktop"));
    }
}
