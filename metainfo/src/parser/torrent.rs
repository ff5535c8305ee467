use crate::{
    parser::parse_bencode,
    types::{ParseOptions, Torrent, TorrentSummary},
    RsbtError,
};
use log::{debug, warn};
use std::path::Path;

pub fn parse_torrent(buf: &[u8], options: &ParseOptions) -> Result<Torrent, RsbtError> {
    let metadata = parse_bencode(buf)?;

    Torrent::from_bencode(metadata, options)
}

/// Reads the whole file at `path` and parses it.
///
/// Failing to read is reported as [`RsbtError::SourceUnavailable`], so it
/// can be told apart from a file that was read but did not parse.
pub fn parse_torrent_file<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Torrent, RsbtError> {
    let path = path.as_ref();
    debug!("attempting to open {}", path.display());

    let buf = std::fs::read(path).map_err(|cause| {
        warn!("unable to open {}: {}", path.display(), cause);
        RsbtError::SourceUnavailable {
            path: path.display().to_string(),
            cause,
        }
    })?;

    parse_torrent(&buf, options)
}

pub fn torrent_summary<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<TorrentSummary, RsbtError> {
    let path = path.as_ref();
    let torrent = parse_torrent_file(path, options)?;

    Ok(torrent.summary(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryInto;

    #[test]
    fn parse_torrent() {
        let torrent_bytes = b"d8:announce36:http://bt1.archive.org:6969/announce13:announce-listll36:http://bt1.archive.org:6969/announceel36:http://bt2.archive.org:6969/announceee4:infod6:lengthi10e4:name5:a.txtee";
        let torrent: Torrent = torrent_bytes.to_vec().try_into().unwrap();

        assert_eq!(torrent.name(), "a.txt");
        assert_eq!(
            torrent.info_hash().to_hex(),
            "afc1458d900e751334516880208924a26b2b6dc4"
        );
    }

    #[test]
    fn parse_torrent_malformed() {
        let err = super::parse_torrent(b"d4:infod4:name5:a.t", &ParseOptions::default()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn parse_torrent_file_missing() {
        let err = parse_torrent_file("/nonexistent/rsbt/missing.torrent", &ParseOptions::default())
            .unwrap_err();
        assert!(err.is_source_unavailable());
        assert!(!err.is_malformed());
    }
}
