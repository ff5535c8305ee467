use serde::{Deserialize, Serialize};
use structopt::StructOpt;

/// Data to be both passed as arguments and in form of config file
#[derive(Default, StructOpt, Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Configuration directory
    ///
    /// Holds the `auth` file with `username:password` lines. Defaults to `~/.rsbt`.
    #[structopt(long, env = "RSBT_CONFIG_DIR")]
    pub config_dir: Option<String>,
    /// Replace undecodable bytes in names and paths instead of failing
    #[structopt(long)]
    #[serde(default)]
    pub lossy_names: bool,
}

/// Global application settings
#[derive(Default, Serialize, Deserialize, Debug)]
pub struct Settings {
    pub config: Config,
}

impl Settings {
    /// Command line values win, unset ones keep what the config file says.
    pub fn override_with(self, config: Config) -> Self {
        Self {
            config: Config {
                config_dir: config.config_dir.or(self.config.config_dir),
                lossy_names: config.lossy_names || self.config.lossy_names,
            },
        }
    }
}
