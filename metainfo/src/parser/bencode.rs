use crate::{
    types::{BencodeDictionary, BencodeValue},
    RsbtError,
};
use nom::{
    bytes::complete::take,
    character::complete::{char, digit1},
    combinator::{cut, map, map_opt, opt, recognize},
    error::ErrorKind,
    multi::many0,
    sequence::{delimited, pair, terminated},
    Err, IResult, Offset,
};

/// Maximum nesting of lists and dictionaries accepted by the decoder.
pub(crate) const MAX_DEPTH: usize = 128;

fn parse_integer(literal: &[u8]) -> Option<i64> {
    let digits = literal.strip_prefix(b"-").unwrap_or(literal);
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }
    if digits.len() != literal.len() && digits == &b"0"[..] {
        return None;
    }
    std::str::from_utf8(literal).ok()?.parse().ok()
}

fn parse_length(literal: &[u8]) -> Option<usize> {
    if literal.len() > 1 && literal[0] == b'0' {
        return None;
    }
    std::str::from_utf8(literal).ok()?.parse().ok()
}

fn integer_literal(i: &[u8]) -> IResult<&[u8], i64> {
    map_opt(recognize(pair(opt(char('-')), digit1)), parse_integer)(i)
}

fn string_length(i: &[u8]) -> IResult<&[u8], usize> {
    map_opt(digit1, parse_length)(i)
}

fn bencode_string(i: &[u8]) -> IResult<&[u8], &[u8]> {
    let (i, len) = terminated(string_length, char(':'))(i)?;
    take(len)(i)
}

fn bencode_integer(i: &[u8]) -> IResult<&[u8], i64> {
    delimited(char('i'), integer_literal, char('e'))(i)
}

fn bencode_list(i: &[u8], depth: usize) -> IResult<&[u8], Vec<BencodeValue>> {
    delimited(
        char('l'),
        many0(move |i| bencode_value(i, depth)),
        char('e'),
    )(i)
}

fn bencode_dictionary(i: &[u8], depth: usize) -> IResult<&[u8], BencodeDictionary> {
    let (mut i, _) = char::<_, (&[u8], ErrorKind)>('d')(i)?;
    let mut dictionary = BencodeDictionary::new();
    loop {
        if let Some(rest) = i.strip_prefix(b"e") {
            return Ok((rest, dictionary));
        }
        let (rest, key) = bencode_string(i)?;
        let (rest, value) = bencode_value(rest, depth)?;
        if dictionary.insert(key.to_vec(), value).is_some() {
            return Err(Err::Failure((i, ErrorKind::Verify)));
        }
        i = rest;
    }
}

fn bencode_value(i: &[u8], depth: usize) -> IResult<&[u8], BencodeValue> {
    if depth > MAX_DEPTH {
        return Err(Err::Failure((i, ErrorKind::TooLarge)));
    }
    // the first byte fixes the variant, so anything going wrong past it is fatal
    match i.first() {
        Some(b'i') => cut(map(bencode_integer, BencodeValue::Integer))(i),
        Some(b'l') => cut(map(move |i| bencode_list(i, depth + 1), BencodeValue::List))(i),
        Some(b'd') => cut(map(
            move |i| bencode_dictionary(i, depth + 1),
            BencodeValue::Dictionary,
        ))(i),
        Some(b'0'..=b'9') => cut(map(bencode_string, |s: &[u8]| {
            BencodeValue::String(s.to_vec())
        }))(i),
        Some(_) => Err(Err::Error((i, ErrorKind::Char))),
        None => Err(Err::Error((i, ErrorKind::Eof))),
    }
}

fn describe(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Eof | ErrorKind::Complete => "unexpected end of input",
        ErrorKind::MapOpt => "number with leading zero, negative zero or out of range",
        ErrorKind::TooLarge => "nesting too deep",
        ErrorKind::Verify => "duplicate dictionary key",
        _ => "unexpected byte",
    }
}

/// Decodes exactly one bencode value spanning the whole of `bytes`.
pub fn parse_bencode(bytes: &[u8]) -> Result<BencodeValue, RsbtError> {
    let malformed = |rest: &[u8], reason: &str| RsbtError::MalformedDescriptor {
        offset: bytes.offset(rest),
        reason: reason.into(),
    };

    match bencode_value(bytes, 0) {
        Ok((rest, value)) if rest.is_empty() => Ok(value),
        Ok((rest, _)) => Err(malformed(rest, "trailing bytes after value")),
        Err(Err::Error((rest, kind))) | Err(Err::Failure((rest, kind))) => {
            Err(malformed(rest, describe(kind)))
        }
        Err(Err::Incomplete(_)) => Err(malformed(
            &bytes[bytes.len()..],
            describe(ErrorKind::Complete),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_at(bytes: &[u8]) -> usize {
        match parse_bencode(bytes) {
            Err(RsbtError::MalformedDescriptor { offset, .. }) => offset,
            other => panic!("expected malformed descriptor, got {:?}", other),
        }
    }

    #[test]
    fn check_bencode_string() {
        assert_eq!(
            bencode_string(b"5:UTF-8"),
            Ok((&vec![][..], &b"UTF-8"[..]))
        );
        assert_eq!(parse_bencode(b"0:").unwrap(), BencodeValue::String(vec![]));
    }

    #[test]
    fn check_bencode_integer() {
        assert_eq!(bencode_integer(b"i3e"), Ok((&vec![][..], 3)));
        assert_eq!(parse_bencode(b"i-3e").unwrap(), BencodeValue::Integer(-3));
        assert_eq!(parse_bencode(b"i0e").unwrap(), BencodeValue::Integer(0));
    }

    #[test]
    fn check_bencode_list() {
        assert_eq!(
            parse_bencode(b"l5:UTF-8i3ee").unwrap(),
            BencodeValue::List(vec!["UTF-8".into(), 3.into()])
        );
        assert_eq!(parse_bencode(b"le").unwrap(), BencodeValue::List(vec![]));
    }

    #[test]
    fn check_bencode_dictionary() {
        assert_eq!(
            parse_bencode(b"d3:cow3:moo4:spam4:eggse").unwrap(),
            crate::bencode_dictionary! { "cow" => "moo", "spam" => "eggs" }
        );

        assert_eq!(
            parse_bencode(b"d4:spaml1:a1:bee").unwrap(),
            crate::bencode_dictionary! {
                "spam" => vec![BencodeValue::from("a"), BencodeValue::from("b")],
            }
        );
    }

    #[test]
    fn unsorted_keys_are_accepted_and_encoded_sorted() {
        let value = parse_bencode(b"d4:spam4:eggs3:cow3:mooe").unwrap();
        assert_eq!(value.encode(), b"d3:cow3:moo4:spam4:eggse".to_vec());
    }

    #[test]
    fn truncated_length_prefix() {
        assert_eq!(malformed_at(b"5:abc"), 2);
        assert_eq!(malformed_at(b"d4:infod4:name"), 14);
        assert_eq!(malformed_at(b"12"), 2);
        assert_eq!(malformed_at(b""), 0);
    }

    #[test]
    fn rejects_non_canonical_numbers() {
        assert_eq!(malformed_at(b"i03e"), 1);
        assert_eq!(malformed_at(b"i-0e"), 1);
        assert_eq!(malformed_at(b"ie"), 1);
        assert_eq!(malformed_at(b"i99999999999999999999e"), 1);
        assert_eq!(malformed_at(b"01:a"), 0);
    }

    #[test]
    fn rejects_trailing_bytes() {
        assert_eq!(malformed_at(b"i1ei2e"), 3);
        assert_eq!(malformed_at(b"dex"), 2);
    }

    #[test]
    fn rejects_bad_dictionaries() {
        assert_eq!(malformed_at(b"d1:ai1e1:ai2ee"), 7);
        assert_eq!(malformed_at(b"di1ei2ee"), 1);
        assert_eq!(malformed_at(b"d1:ai1e"), 7);
    }

    #[test]
    fn rejects_unterminated_list() {
        assert_eq!(malformed_at(b"l1:a"), 4);
        assert_eq!(malformed_at(b"lx"), 1);
    }

    #[test]
    fn rejects_excessive_nesting() {
        let mut bytes = vec![b'l'; MAX_DEPTH + 2];
        bytes.extend(vec![b'e'; MAX_DEPTH + 2]);
        assert!(parse_bencode(&bytes).unwrap_err().is_malformed());

        let mut bytes = vec![b'l'; MAX_DEPTH];
        bytes.extend(vec![b'e'; MAX_DEPTH]);
        assert!(parse_bencode(&bytes).is_ok());
    }

    #[test]
    fn decode_encode_round_trip() {
        let value = crate::bencode_dictionary! {
            "info" => crate::bencode_dictionary! {
                "files" => vec![crate::bencode_dictionary! {
                    "length" => 5,
                    "path" => vec![BencodeValue::from("a.txt")],
                }],
                "name" => "pkg",
            },
            "comment" => &b"\x00\xff"[..],
            "creation date" => -1,
        };
        assert_eq!(parse_bencode(&value.encode()).unwrap(), value);
    }
}
