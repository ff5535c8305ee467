use crate::types::{
    configuration::{ConfigDir, Settings},
    ParseOptions,
};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Properties {
    /// Config path
    pub config_dir: PathBuf,
    /// Replace undecodable bytes in names and paths
    pub lossy_names: bool,
}

impl Properties {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            lossy_text: self.lossy_names,
        }
    }

    pub fn config_dir(&self) -> ConfigDir {
        ConfigDir::new(&self.config_dir)
    }
}

impl From<(Settings, PathBuf)> for Properties {
    fn from(value: (Settings, PathBuf)) -> Self {
        let config = value.0.config;
        let default_config_dir = value.1;
        Self {
            config_dir: config
                .config_dir
                .map(PathBuf::from)
                .unwrap_or(default_config_dir),
            lossy_names: config.lossy_names,
        }
    }
}
