// Front-desk configuration

use std::path::PathBuf;

pub const DEFAULT_SNAPSHOT_PATH: &str = "roomdata.json";

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub snapshot_path: PathBuf,
    // Default tracing filter; RUST_LOG wins when set
    pub log_level: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            log_level: "info".to_string(),
        }
    }
}

impl DeskConfig {
    // Takes the process arguments without the program name; the first one, if any, is the snapshot path
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let mut config = Self::default();
        if let Some(path) = args.into_iter().next() {
            config.snapshot_path = path.into();
        }
        config
    }
}
