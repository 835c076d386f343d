use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Launch failures. The `Display` text is what the user sees in the error dialog.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to get executable path.")]
    PathResolution(String),

    #[error("Firefox not found.\n\nExpected at:\n{}", list_candidates(.tried))]
    ExecutableNotFound { tried: Vec<PathBuf> },

    #[error(
        "Failed to create profile directory.\n\n{}\n\n{}",
        .path.display(),
        os_detail(.source)
    )]
    ProfileDirectory { path: PathBuf, source: io::Error },

    #[error("Failed to launch Firefox.\n\n{}", os_detail(.source))]
    Spawn { code: Option<i32>, source: io::Error },
}

impl Error {
    /// OS error code behind the failure, if the OS reported one.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Error::Spawn { code, .. } => *code,
            Error::ProfileDirectory { source, .. } => source.raw_os_error(),
            Error::PathResolution(_) | Error::ExecutableNotFound { .. } => None,
        }
    }
}

fn list_candidates(tried: &[PathBuf]) -> String {
    tried
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn os_detail(source: &io::Error) -> String {
    match source.raw_os_error() {
        Some(code) => format!("Error code: {}", code),
        None => source.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
