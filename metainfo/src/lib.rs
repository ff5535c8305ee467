use std::path::PathBuf;

mod auth;
mod errors;
mod parser;
mod types;

pub use auth::localhost_auth_uri;
pub use auth::AuthFile as RsbtAuthFile;
pub use auth::SecretsSource as RsbtSecretsSource;
pub use auth::{AUTH_FILE, LOCALCLIENT};
pub use errors::RsbtError;
pub use errors::TryFromBencode as RsbtTryFromBencode;
pub use parser::{parse_bencode, parse_torrent, parse_torrent_file, torrent_summary};
pub use types::decode_text;
pub use types::BencodeDictionary as RsbtBencodeDictionary;
pub use types::BencodeValue as RsbtBencodeValue;
pub use types::Config as RsbtConfig;
pub use types::ConfigDir as RsbtConfigDir;
pub use types::ConfigDirResolver as RsbtConfigDirResolver;
pub use types::FileEntry as RsbtFileEntry;
pub use types::InfoHash as RsbtInfoHash;
pub use types::ParseOptions as RsbtParseOptions;
pub use types::Properties as RsbtProperties;
pub use types::Settings as RsbtSettings;
pub use types::Torrent as RsbtTorrent;
pub use types::TorrentSummary as RsbtTorrentSummary;
pub use types::DEFAULT_ENCODING;

pub(crate) const SHA1_SIZE: usize = 20;

pub fn default_app_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".rsbt")
}
