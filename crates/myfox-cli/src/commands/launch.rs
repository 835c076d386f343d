//! Start the portable Firefox next to this executable.
//!
//! Runs the launch stages in order and stops at the first failure:
//! resolve the install root, locate Firefox, ensure the profile, then spawn.
//! Nothing is retried.

use anyhow::Result;
use myfox_browser::{FirefoxFinder, InstallRoot, LaunchCommand, PortableLayout, PortableProfile};

/// Launch Firefox from the tree this executable lives in
pub fn execute() -> Result<u32> {
    let root = InstallRoot::current()?;
    execute_in(&root, &PortableLayout::default())
}

/// Launch Firefox from an explicit install root and layout, returning its pid
pub fn execute_in(root: &InstallRoot, layout: &PortableLayout) -> Result<u32> {
    // Step 1: Find Firefox
    let firefox = FirefoxFinder::new(root, &layout.candidates).find()?;
    tracing::debug!("Found Firefox at: {}", firefox.display());

    // Step 2: Ensure profile
    let profile = PortableProfile::ensure(root, layout)?;
    tracing::debug!("Using profile: {}", profile.path().display());

    // Step 3: Build command
    let command = LaunchCommand::new(firefox, profile.path());

    // Step 4: Launch Firefox
    let pid = command.spawn_detached()?;
    tracing::info!("Firefox started (pid {})", pid);

    Ok(pid)
}
