mod bencode;
mod torrent;

pub use bencode::parse_bencode;
pub use torrent::{parse_torrent, parse_torrent_file, torrent_summary};
