use std::path::{Path, PathBuf};

/// Maps a logical configuration name (such as `auth`) to a file path.
pub trait ConfigDirResolver {
    fn resolve(&self, name: &str) -> PathBuf;
}

/// Resolves names as files directly inside one directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDir {
    root: PathBuf,
}

impl ConfigDir {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new(crate::default_app_dir())
    }
}

impl ConfigDirResolver for ConfigDir {
    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl<R: ConfigDirResolver + ?Sized> ConfigDirResolver for &R {
    fn resolve(&self, name: &str) -> PathBuf {
        (**self).resolve(name)
    }
}
