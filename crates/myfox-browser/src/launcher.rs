use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const PROFILE_FLAG: &str = "-profile";
const NO_REMOTE_FLAG: &str = "-no-remote";

#[cfg(windows)]
const DETACHED_PROCESS: u32 = 0x0000_0008;

/// A fully resolved Firefox invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: PathBuf,
    profile: PathBuf,
    working_dir: PathBuf,
}

impl LaunchCommand {
    /// Build the command for `program`, running from its own directory
    pub fn new(program: PathBuf, profile: &Path) -> Self {
        let working_dir = program
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            program,
            profile: profile.to_path_buf(),
            working_dir,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Firefox command-line arguments
    pub fn args(&self) -> Vec<OsString> {
        vec![
            PROFILE_FLAG.into(),
            self.profile.clone().into_os_string(),
            NO_REMOTE_FLAG.into(),
        ]
    }

    /// The command line exactly as Windows receives it
    pub fn command_line(&self) -> String {
        format!(
            "\"{}\" {} \"{}\" {}",
            self.program.display(),
            PROFILE_FLAG,
            self.profile.display(),
            NO_REMOTE_FLAG
        )
    }

    /// Start Firefox without waiting for it and return its pid.
    pub fn spawn_detached(&self) -> Result<u32> {
        tracing::debug!("Spawning {}", self.command_line());

        let child = self.build_command().spawn().map_err(|source| Error::Spawn {
            code: source.raw_os_error(),
            source,
        })?;
        let pid = child.id();

        // Dropping a Child closes its handles; it never waits on or kills the process.
        drop(child);

        Ok(pid)
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            // std only quotes arguments containing whitespace
            let mut profile = OsString::from("\"");
            profile.push(&self.profile);
            profile.push("\"");

            cmd.arg(PROFILE_FLAG)
                .raw_arg(profile)
                .arg(NO_REMOTE_FLAG)
                .creation_flags(DETACHED_PROCESS);
        }

        #[cfg(not(windows))]
        {
            cmd.args(self.args());
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        cmd.current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        cmd
    }
}
