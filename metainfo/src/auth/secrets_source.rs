use crate::types::ConfigDirResolver;
use std::{io, path::PathBuf};

/// Logical name of the secrets file inside the configuration directory.
pub const AUTH_FILE: &str = "auth";

/// Something holding `username:password` lines.
pub trait SecretsSource {
    fn read_secrets(&self) -> io::Result<String>;
}

/// The `auth` file of a configuration directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthFile {
    path: PathBuf,
}

impl AuthFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn resolve<R: ConfigDirResolver>(resolver: &R) -> Self {
        Self::new(resolver.resolve(AUTH_FILE))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SecretsSource for AuthFile {
    fn read_secrets(&self) -> io::Result<String> {
        if !self.path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", self.path.display()),
            ));
        }
        // lossy so a torn or binary line is just skipped later on
        std::fs::read(&self.path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl SecretsSource for str {
    fn read_secrets(&self) -> io::Result<String> {
        Ok(self.to_string())
    }
}

impl SecretsSource for String {
    fn read_secrets(&self) -> io::Result<String> {
        Ok(self.clone())
    }
}

impl<S: SecretsSource + ?Sized> SecretsSource for &S {
    fn read_secrets(&self) -> io::Result<String> {
        (**self).read_secrets()
    }
}
