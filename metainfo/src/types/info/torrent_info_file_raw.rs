use crate::{
    errors::TryFromBencode,
    types::{info::FileEntry, text_encoding::TextDecoder, BencodeDictionary, BencodeValue},
    RsbtError,
};
use std::convert::{TryFrom, TryInto};

#[derive(Debug, PartialEq)]
pub(crate) struct TorrentInfoFileRaw<'a> {
    pub length: u64,
    pub path: &'a [BencodeValue],
}

try_from_bencode!(TorrentInfoFileRaw,
    normal: (
        "length" => length: u64,
        "path" => path: &[BencodeValue]
    ),
);

impl<'a> TorrentInfoFileRaw<'a> {
    /// Builds the file entry, decoding every path segment with `decoder`.
    ///
    /// `key` names this file in error messages, e.g. `info.files[3]`.
    pub(crate) fn entry(
        &self,
        decoder: &TextDecoder,
        prefix: Option<&str>,
        key: &str,
    ) -> Result<FileEntry, RsbtError> {
        if self.path.is_empty() {
            return Err(RsbtError::invalid_schema(
                format!("{}.path", key),
                TryFromBencode::EmptyPath,
            ));
        }

        let mut segments: Vec<String> = prefix.map(String::from).into_iter().collect();
        for (index, segment) in self.path.iter().enumerate() {
            let field = format!("{}.path[{}]", key, index);
            let bytes: &[u8] = segment
                .try_into()
                .map_err(|e| RsbtError::invalid_schema(field.clone(), e))?;
            segments.push(decoder.decode(bytes, &field)?);
        }

        Ok(FileEntry::new(segments.join("/"), self.length))
    }
}
