mod localhost_auth_uri;
mod secrets_source;

pub use localhost_auth_uri::{localhost_auth_uri, LOCALCLIENT};
pub use secrets_source::{AuthFile, SecretsSource, AUTH_FILE};
