//! Launch stages for a portable Firefox tree: find the install root, pick the
//! bundled Firefox, make sure the profile exists, then start Firefox detached.

mod error;
mod firefox_finder;
mod install_root;
mod launcher;
mod layout;
mod profile;

pub use error::{Error, Result};
pub use firefox_finder::FirefoxFinder;
pub use install_root::{InstallRoot, MAX_PATH_LEN};
pub use launcher::LaunchCommand;
pub use layout::PortableLayout;
pub use profile::PortableProfile;
