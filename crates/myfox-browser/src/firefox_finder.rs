use crate::{Error, InstallRoot, Result};
use std::path::PathBuf;

/// Locates the bundled Firefox binary inside a portable tree
pub struct FirefoxFinder<'a> {
    root: &'a InstallRoot,
    candidates: &'a [PathBuf],
}

impl<'a> FirefoxFinder<'a> {
    /// Create a finder probing `candidates` (relative to `root`) in order
    pub fn new(root: &'a InstallRoot, candidates: &'a [PathBuf]) -> Self {
        Self { root, candidates }
    }

    /// Return the first candidate that exists on disk
    pub fn find(&self) -> Result<PathBuf> {
        let found = self
            .candidates
            .iter()
            .map(|relative| self.root.join(relative))
            .find(|path| {
                tracing::debug!("Probing {}", path.display());
                path.exists()
            });

        match found {
            Some(path) => Ok(path),
            None => Err(Error::ExecutableNotFound {
                tried: self.candidates.to_vec(),
            }),
        }
    }
}
