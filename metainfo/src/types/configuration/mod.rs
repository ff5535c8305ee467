mod config;
mod config_dir;
mod properties;

pub use config::{Config, Settings};
pub use config_dir::{ConfigDir, ConfigDirResolver};
pub use properties::Properties;
