use crate::{
    errors::TryFromBencode,
    types::{
        info::{FileEntry, TorrentInfoFileRaw},
        text_encoding::TextDecoder,
        BencodeDictionary, BencodeValue,
    },
    RsbtError,
};
use std::convert::{TryFrom, TryInto};

/// Borrowed, type-checked view of an `info` dictionary.
#[derive(Debug, PartialEq)]
pub(crate) struct TorrentInfoRaw<'a> {
    pub name: &'a [u8],
    pub length: Option<u64>,
    pub files: Option<&'a [BencodeValue]>,
}

try_from_bencode!(TorrentInfoRaw,
    normal: (
        "name" => name: &[u8]
    ),
    optional: (
        "length" => length: u64,
        "files" => files: &[BencodeValue]
    ),
);

impl<'a> TorrentInfoRaw<'a> {
    /// Returns the normalized file list.
    ///
    /// `files` wins over `length` when both are present. The torrent name is
    /// prepended only when `files` holds more than one entry.
    pub(crate) fn files(&self, decoder: &TextDecoder, name: &str) -> Result<Vec<FileEntry>, RsbtError> {
        let files = match self.files {
            Some(files) => files,
            None => {
                let length = self.length.ok_or_else(|| {
                    RsbtError::invalid_schema("info.length", TryFromBencode::Missing)
                })?;
                return Ok(vec![FileEntry::new(name, length)]);
            }
        };

        let prefix = if files.len() > 1 { Some(name) } else { None };

        files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let key = format!("info.files[{}]", index);
                let file: TorrentInfoFileRaw = file.try_into().map_err(|e: RsbtError| e.within(&key))?;
                file.entry(decoder, prefix, &key)
            })
            .collect()
    }
}
