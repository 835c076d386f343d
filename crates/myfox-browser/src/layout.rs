use std::path::PathBuf;

/// Directory structure of a portable MyFox tree, relative to its install root.
///
/// The launcher takes no flags; everything it needs comes from this layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortableLayout {
    /// Firefox executables to probe, in priority order.
    pub candidates: Vec<PathBuf>,
    /// Writable data area, created before the profile.
    pub data_dir: PathBuf,
    /// Profile handed to Firefox via `-profile`.
    pub profile_dir: PathBuf,
}

impl Default for PortableLayout {
    fn default() -> Self {
        let app = PathBuf::from("App");
        let data_dir = PathBuf::from("Data");

        Self {
            candidates: vec![
                app.join("Firefox64").join("firefox.exe"),
                app.join("Firefox").join("firefox.exe"),
            ],
            profile_dir: data_dir.join("profile"),
            data_dir,
        }
    }
}
