#[macro_use]
mod bencode;
pub mod configuration;
pub mod info;
pub(crate) mod text_encoding;
pub mod torrent;

pub use bencode::{BencodeDictionary, BencodeValue};
pub use configuration::{Config, ConfigDir, ConfigDirResolver, Properties, Settings};
pub use info::{FileEntry, InfoHash};
pub use text_encoding::{decode_text, DEFAULT_ENCODING};
pub use torrent::{ParseOptions, Torrent, TorrentSummary};
