use crate::RsbtError;
use encoding_rs::{Encoding, UTF_8};
use log::warn;
use std::borrow::Cow;

/// Encoding assumed for torrents which do not declare one.
pub const DEFAULT_ENCODING: &str = "UTF-8";

const ASCII_LABELS: &[&str] = &["ascii", "us-ascii", "646", "ansi_x3.4-1968", "ansi_x3.4-1986"];

const LATIN1_LABELS: &[&str] = &[
    "latin1", "latin-1", "latin", "l1", "iso-8859-1", "iso8859-1", "8859", "cp819", "iso-ir-100",
];

#[derive(Debug, Clone, Copy)]
enum Charset {
    /// Strict 7-bit.
    Ascii,
    /// ISO-8859-1, every byte maps to the code point of the same value.
    Latin1,
    Whatwg(&'static Encoding),
}

impl Charset {
    /// Resolves codec names as they appear in torrents: WHATWG labels plus the
    /// `_`/`-` spelling variants common in Python codec names.
    fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        let dashed = label.replace('_', "-");

        if ASCII_LABELS.contains(&label.as_str()) || ASCII_LABELS.contains(&dashed.as_str()) {
            return Some(Charset::Ascii);
        }
        if LATIN1_LABELS.contains(&dashed.as_str()) {
            return Some(Charset::Latin1);
        }

        let underscored = label.replace('-', "_");
        [label.as_str(), dashed.as_str(), underscored.as_str()]
            .iter()
            .find_map(|candidate| Encoding::for_label(candidate.as_bytes()))
            .map(Charset::Whatwg)
    }

    fn decode_strict<'a>(self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            Charset::Ascii if bytes.is_ascii() => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Charset::Ascii => None,
            Charset::Latin1 => Some(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
            Charset::Whatwg(encoding) => encoding.decode_without_bom_handling_and_without_replacement(bytes),
        }
    }

    fn decode_lossy<'a>(self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            Charset::Ascii => Cow::Owned(
                bytes
                    .iter()
                    .map(|&b| if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER })
                    .collect(),
            ),
            Charset::Latin1 => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Whatwg(encoding) => encoding.decode_without_bom_handling(bytes).0,
        }
    }
}

/// Decodes raw torrent strings under a declared encoding into UTF-8 text.
#[derive(Debug, Clone)]
pub(crate) struct TextDecoder {
    charset: Charset,
    label: String,
    lossy: bool,
}

impl TextDecoder {
    /// Looks up `label`, case-insensitive. `ascii` and `latin-1` keep their
    /// strict meaning instead of the WHATWG windows-1252 alias.
    ///
    /// An unknown label is an error unless `lossy` is set, in which case UTF-8
    /// is used instead.
    pub(crate) fn new(label: &str, lossy: bool) -> Result<Self, RsbtError> {
        let charset = match Charset::for_label(label) {
            Some(charset) => charset,
            None if lossy => {
                warn!("unknown encoding {:?}, falling back to {}", label, DEFAULT_ENCODING);
                Charset::Whatwg(UTF_8)
            }
            None => return Err(RsbtError::text_encoding("encoding", label)),
        };

        Ok(Self {
            charset,
            label: label.into(),
            lossy,
        })
    }

    pub(crate) fn decode(&self, bytes: &[u8], field: &str) -> Result<String, RsbtError> {
        if let Some(text) = self.charset.decode_strict(bytes) {
            return Ok(text.into_owned());
        }

        if self.lossy {
            warn!("{} is not valid {}, replacing malformed sequences", field, self.label);
            Ok(self.charset.decode_lossy(bytes).into_owned())
        } else {
            Err(RsbtError::text_encoding(field, self.label.as_str()))
        }
    }
}

/// Decodes `bytes` of `field` under the encoding named `label`.
pub fn decode_text(bytes: &[u8], label: &str, field: &str, lossy: bool) -> Result<String, RsbtError> {
    TextDecoder::new(label, lossy)?.decode(bytes, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_error(result: Result<String, RsbtError>) -> (String, String) {
        match result {
            Err(RsbtError::TextEncoding { field, encoding }) => (field, encoding),
            other => panic!("expected text encoding error, got {:?}", other),
        }
    }

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_text("Příliš".as_bytes(), "UTF-8", "info.name", false).unwrap(), "Příliš");
        assert_eq!(decode_text(b"plain", "utf8", "info.name", false).unwrap(), "plain");
    }

    #[test]
    fn legacy_encodings_are_converted() {
        assert_eq!(
            decode_text(b"\xcf\xf0\xe8\xe2\xe5\xf2", "windows-1251", "info.name", false).unwrap(),
            "Привет"
        );
        assert_eq!(
            decode_text(b"\x83e\x83X\x83g", "Shift_JIS", "info.name", false).unwrap(),
            "テスト"
        );
    }

    #[test]
    fn invalid_bytes_fail_by_default() {
        let (field, encoding) = text_error(decode_text(b"caf\xe9", "UTF-8", "info.files[0].path[1]", false));
        assert_eq!(field, "info.files[0].path[1]");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn invalid_bytes_are_replaced_when_lossy() {
        assert_eq!(
            decode_text(b"caf\xe9", "UTF-8", "info.name", true).unwrap(),
            "caf\u{fffd}"
        );
    }

    #[test]
    fn unknown_label() {
        let (field, encoding) = text_error(decode_text(b"abc", "klingon", "info.name", false));
        assert_eq!(field, "encoding");
        assert_eq!(encoding, "klingon");

        assert_eq!(decode_text(b"abc", "klingon", "info.name", true).unwrap(), "abc");
    }

    #[test]
    fn ascii_is_strict_seven_bit() {
        assert_eq!(decode_text(b"cafe", "ascii", "info.name", false).unwrap(), "cafe");

        let (field, encoding) = text_error(decode_text(b"caf\xe9", "ascii", "info.name", false));
        assert_eq!(field, "info.name");
        assert_eq!(encoding, "ascii");
        text_error(decode_text(b"caf\xe9", "US-ASCII", "info.name", false));

        assert_eq!(
            decode_text(b"caf\xe9", "ascii", "info.name", true).unwrap(),
            "caf\u{fffd}"
        );
    }

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        for label in &["latin-1", "latin1", "ISO-8859-1", "iso_8859_1"] {
            assert_eq!(decode_text(b"caf\xe9", label, "info.name", false).unwrap(), "café");
        }
        // 0x80..0x9f are C1 controls in Latin-1, not windows-1252 punctuation
        assert_eq!(decode_text(b"\x80", "latin-1", "info.name", false).unwrap(), "\u{80}");
    }

    #[test]
    fn python_codec_spellings_are_accepted() {
        assert_eq!(
            decode_text(b"\x83e\x83X\x83g", "shift-jis", "info.name", false).unwrap(),
            "テスト"
        );
        assert_eq!(decode_text("Příliš".as_bytes(), "utf_8", "info.name", false).unwrap(), "Příliš");
        assert_eq!(
            decode_text(b"\xcf\xf0\xe8\xe2\xe5\xf2", "cp1251", "info.name", false).unwrap(),
            "Привет"
        );
    }
}
