use crate::{Error, InstallRoot, PortableLayout, Result};
use std::io;
use std::path::{Path, PathBuf};

/// The profile directory bundled with a portable tree
pub struct PortableProfile {
    path: PathBuf,
}

impl PortableProfile {
    /// Make sure the data and profile directories exist, parent first.
    ///
    /// A directory that is already there counts as created.
    pub fn ensure(root: &InstallRoot, layout: &PortableLayout) -> Result<Self> {
        create_if_absent(&root.join(&layout.data_dir))?;

        let path = root.join(&layout.profile_dir);
        create_if_absent(&path)?;

        Ok(Self { path })
    }

    /// Get the profile directory path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn create_if_absent(path: &Path) -> Result<()> {
    match std::fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!("Created {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(Error::ProfileDirectory {
            path: path.to_path_buf(),
            source,
        }),
    }
}
