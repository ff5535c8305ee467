/// File listed by a torrent.
///
/// `path` is UTF-8 text with `/` between segments, already prefixed with the
/// torrent name when the torrent lists more than one file.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FileEntry {
    pub path: String,
    pub size: u64,
    pub download: bool,
}

impl FileEntry {
    pub fn new<P: Into<String>>(path: P, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
            download: true,
        }
    }
}
