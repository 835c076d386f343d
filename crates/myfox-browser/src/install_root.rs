use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Longest executable path the launcher accepts, in platform path units.
#[cfg(windows)]
pub const MAX_PATH_LEN: usize = 260;
#[cfg(not(windows))]
pub const MAX_PATH_LEN: usize = 4096;

/// Directory holding the launcher binary; every other path hangs off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot {
    path: PathBuf,
}

impl InstallRoot {
    /// Resolve the root from the running executable's own location
    pub fn current() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| Error::PathResolution(e.to_string()))?;
        Self::from_exe_path(&exe)
    }

    /// Derive the root from an executable path by stripping the file name
    pub fn from_exe_path(exe: &Path) -> Result<Self> {
        let len = path_len(exe);
        if len >= MAX_PATH_LEN {
            return Err(Error::PathResolution(format!(
                "executable path is {} units long, limit is {}",
                len, MAX_PATH_LEN
            )));
        }

        let path = exe
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                Error::PathResolution(format!("no parent directory for {}", exe.display()))
            })?;

        tracing::debug!("Install root: {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Join a layout-relative path onto the root
    pub fn join(&self, relative: &Path) -> PathBuf {
        self.path.join(relative)
    }
}

#[cfg(windows)]
fn path_len(path: &Path) -> usize {
    use std::os::windows::ffi::OsStrExt;
    path.as_os_str().encode_wide().count()
}

#[cfg(not(windows))]
fn path_len(path: &Path) -> usize {
    path.as_os_str().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_exe_parent() {
        let temp = tempfile::tempdir().unwrap();
        let exe = temp.path().join("MyFox.exe");

        let root = InstallRoot::from_exe_path(&exe).unwrap();

        assert_eq!(root.path(), temp.path());
        assert_eq!(root.join(Path::new("Data")), temp.path().join("Data"));
    }

    #[test]
    fn test_current_resolves_test_binary_dir() {
        let root = InstallRoot::current().unwrap();
        let exe = std::env::current_exe().unwrap();

        assert_eq!(Some(root.path()), exe.parent());
    }

    #[test]
    fn test_overlong_path_is_rejected() {
        let exe = PathBuf::from("a".repeat(MAX_PATH_LEN)).join("MyFox.exe");

        let result = InstallRoot::from_exe_path(&exe);

        assert!(matches!(result, Err(Error::PathResolution(_))));
    }

    #[test]
    fn test_bare_file_name_has_no_root() {
        let result = InstallRoot::from_exe_path(Path::new("MyFox.exe"));

        assert!(matches!(result, Err(Error::PathResolution(_))));
    }
}
