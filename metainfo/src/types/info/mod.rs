mod file_entry;
mod info_hash;
mod torrent_info_file_raw;
mod torrent_info_raw;

pub use file_entry::FileEntry;
pub use info_hash::InfoHash;
pub(crate) use torrent_info_file_raw::TorrentInfoFileRaw;
pub(crate) use torrent_info_raw::TorrentInfoRaw;
