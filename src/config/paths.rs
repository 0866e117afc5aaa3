use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
}

impl ConfigPaths {
    /// `None` when the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        dirs::home_dir().map(|home| ConfigPaths {
            rc_path: home.join(".lemshellrc"),
        })
    }
}
