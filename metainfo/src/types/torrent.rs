use crate::{
    errors::TryFromBencode,
    types::{
        info::{FileEntry, InfoHash, TorrentInfoRaw},
        text_encoding::{TextDecoder, DEFAULT_ENCODING},
        BencodeDictionary, BencodeValue,
    },
    RsbtError,
};
use log::debug;
use std::convert::{TryFrom, TryInto};

/// Controls how torrent text fields are decoded.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ParseOptions {
    /// Replace undecodable sequences with U+FFFD instead of failing.
    pub lossy_text: bool,
}

#[derive(Debug, PartialEq)]
struct TorrentRaw<'a> {
    encoding: Option<&'a [u8]>,
    info: &'a BencodeValue,
}

try_from_bencode!(TorrentRaw,
    optional: ("encoding" => encoding: &[u8]),
    bencode: ("info" => info),
);

/// Parsed torrent descriptor.
///
/// Immutable once built: the decoded metadata is kept as is, everything else
/// is derived from it during construction.
#[derive(Debug, PartialEq, Clone)]
pub struct Torrent {
    metadata: BencodeDictionary,
    info_hash: InfoHash,
    encoding: String,
    name: String,
    files: Vec<FileEntry>,
}

impl Torrent {
    pub fn from_bencode(metadata: BencodeValue, options: &ParseOptions) -> Result<Self, RsbtError> {
        let metadata = match metadata {
            BencodeValue::Dictionary(dictionary) => dictionary,
            _ => {
                return Err(RsbtError::invalid_schema(
                    "metadata",
                    TryFromBencode::NotDictionary,
                ))
            }
        };

        let (info_hash, encoding, name, files) = {
            let raw: TorrentRaw = (&metadata).try_into()?;

            let encoding = match raw.encoding {
                Some(label) => std::str::from_utf8(label)
                    .map_err(|_| RsbtError::text_encoding("encoding", DEFAULT_ENCODING))?
                    .to_string(),
                None => DEFAULT_ENCODING.to_string(),
            };

            let info_hash = InfoHash::from_info(raw.info);

            let info: TorrentInfoRaw = raw
                .info
                .try_into()
                .map_err(|e: RsbtError| e.within("info"))?;

            let decoder = TextDecoder::new(&encoding, options.lossy_text)?;
            let name = decoder.decode(info.name, "info.name")?;
            let files = info.files(&decoder, &name)?;

            (info_hash, encoding, name, files)
        };

        debug!(
            "parsed torrent {:?} ({}), {} file(s)",
            name,
            info_hash,
            files.len()
        );

        Ok(Self {
            metadata,
            info_hash,
            encoding,
            name,
            files,
        })
    }

    /// The full decoded root dictionary.
    pub fn metadata(&self) -> &BencodeDictionary {
        &self.metadata
    }

    pub fn info_hash(&self) -> &InfoHash {
        &self.info_hash
    }

    /// Declared text encoding, `UTF-8` when the torrent does not declare one.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Returns total length of torrent in bytes.
    ///
    /// For single file torrent it is the size of this file.
    /// For multi files torrent it is the sum of all file sizes.
    pub fn total_length(&self) -> u64 {
        self.files.iter().map(|file| file.size).sum()
    }

    pub fn is_single_file(&self) -> bool {
        self.metadata
            .get(&b"info"[..])
            .and_then(|info| info.get("files"))
            .is_none()
    }

    pub fn summary<F: Into<String>>(&self, filename: F) -> TorrentSummary {
        TorrentSummary {
            filename: filename.into(),
            name: self.name.clone(),
            encoding: self.encoding.clone(),
            files: self.files.clone(),
            info_hash: self.info_hash,
        }
    }
}

impl TryFrom<&[u8]> for Torrent {
    type Error = RsbtError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        crate::parser::parse_torrent(value, &ParseOptions::default())
    }
}

impl TryFrom<Vec<u8>> for Torrent {
    type Error = RsbtError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        value.as_slice().try_into()
    }
}

/// Short description of a torrent file on disk.
#[derive(Debug, PartialEq, Clone)]
pub struct TorrentSummary {
    pub filename: String,
    pub name: String,
    pub encoding: String,
    pub files: Vec<FileEntry>,
    pub info_hash: InfoHash,
}
