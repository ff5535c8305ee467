use crate::errors::TryFromBencode;
use std::collections::BTreeMap;
use std::convert::{TryFrom, TryInto};

pub type BencodeDictionary = BTreeMap<Vec<u8>, BencodeValue>;

/// Decoded bencode value.
///
/// Dictionary keys are raw bytes kept in a `BTreeMap`, so iteration (and
/// therefore [`BencodeValue::encode`]) always yields them in ascending byte
/// order no matter how they were ordered on the wire.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BencodeValue {
    Integer(i64),
    String(Vec<u8>),
    List(Vec<BencodeValue>),
    Dictionary(BencodeDictionary),
}

impl BencodeValue {
    /// Canonical encoding: sorted keys, no leading zeros, no whitespace.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![];
        self.encode_into(&mut buf);
        buf
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            BencodeValue::Integer(value) => {
                buf.push(b'i');
                buf.extend_from_slice(value.to_string().as_bytes());
                buf.push(b'e');
            }
            BencodeValue::String(value) => encode_string(value, buf),
            BencodeValue::List(values) => {
                buf.push(b'l');
                for value in values {
                    value.encode_into(buf);
                }
                buf.push(b'e');
            }
            BencodeValue::Dictionary(dictionary) => {
                buf.push(b'd');
                for (key, value) in dictionary {
                    encode_string(key, buf);
                    value.encode_into(buf);
                }
                buf.push(b'e');
            }
        }
    }

    /// Looks up `key` if this value is a dictionary.
    pub fn get(&self, key: &str) -> Option<&BencodeValue> {
        match self {
            BencodeValue::Dictionary(dictionary) => dictionary.get(key.as_bytes()),
            _ => None,
        }
    }
}

fn encode_string(value: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(value.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(value);
}

impl From<i64> for BencodeValue {
    fn from(value: i64) -> Self {
        BencodeValue::Integer(value)
    }
}

impl From<&str> for BencodeValue {
    fn from(value: &str) -> Self {
        BencodeValue::String(value.as_bytes().to_vec())
    }
}

impl From<&[u8]> for BencodeValue {
    fn from(value: &[u8]) -> Self {
        BencodeValue::String(value.to_vec())
    }
}

impl From<Vec<BencodeValue>> for BencodeValue {
    fn from(values: Vec<BencodeValue>) -> Self {
        BencodeValue::List(values)
    }
}

impl From<BencodeDictionary> for BencodeValue {
    fn from(dictionary: BencodeDictionary) -> Self {
        BencodeValue::Dictionary(dictionary)
    }
}

impl<'a> TryFrom<&'a BencodeValue> for &'a [u8] {
    type Error = TryFromBencode;

    fn try_from(value: &'a BencodeValue) -> Result<Self, Self::Error> {
        match value {
            BencodeValue::String(s) => Ok(s),
            _ => Err(TryFromBencode::NotString),
        }
    }
}

impl<'a> TryFrom<&'a BencodeValue> for i64 {
    type Error = TryFromBencode;

    fn try_from(value: &'a BencodeValue) -> Result<Self, Self::Error> {
        match value {
            BencodeValue::Integer(i) => Ok(*i),
            _ => Err(TryFromBencode::NotInteger),
        }
    }
}

impl<'a> TryFrom<&'a BencodeValue> for u64 {
    type Error = TryFromBencode;

    fn try_from(value: &'a BencodeValue) -> Result<Self, Self::Error> {
        let i: i64 = value.try_into()?;
        i.try_into().map_err(|_| TryFromBencode::Negative(i))
    }
}

impl<'a> TryFrom<&'a BencodeValue> for &'a [BencodeValue] {
    type Error = TryFromBencode;

    fn try_from(value: &'a BencodeValue) -> Result<Self, Self::Error> {
        match value {
            BencodeValue::List(l) => Ok(l),
            _ => Err(TryFromBencode::NotList),
        }
    }
}

impl<'a> TryFrom<&'a BencodeValue> for &'a BencodeDictionary {
    type Error = TryFromBencode;

    fn try_from(value: &'a BencodeValue) -> Result<Self, Self::Error> {
        match value {
            BencodeValue::Dictionary(d) => Ok(d),
            _ => Err(TryFromBencode::NotDictionary),
        }
    }
}

macro_rules! try_from_bencode {
    ($type:ident,
        $(normal: ($($normal_key:expr => $normal_field:ident: $normal_type:ty),*),)*
        $(optional: ($($optional_key:expr => $optional_field:ident: $optional_type:ty),*),)*
        $(bencode: ($($bencode_key:expr => $bencode_field:ident),*),)*) => {
        impl<'a> TryFrom<&'a BencodeDictionary> for $type<'a> {
            type Error = RsbtError;

            fn try_from(dictionary: &'a BencodeDictionary) -> Result<Self, Self::Error> {
                $($(let $normal_field: $normal_type = dictionary
                    .get($normal_key.as_bytes())
                    .ok_or_else(|| RsbtError::invalid_schema($normal_key, TryFromBencode::Missing))?
                    .try_into()
                    .map_err(|e| RsbtError::invalid_schema($normal_key, e))?;)*)*
                $($(let $optional_field: Option<$optional_type> = match dictionary.get($optional_key.as_bytes()) {
                    Some(value) => Some(
                        value
                            .try_into()
                            .map_err(|e| RsbtError::invalid_schema($optional_key, e))?,
                    ),
                    None => None,
                };)*)*
                $($(let $bencode_field: &BencodeValue = dictionary
                    .get($bencode_key.as_bytes())
                    .ok_or_else(|| RsbtError::invalid_schema($bencode_key, TryFromBencode::Missing))?;)*)*

                Ok(Self {
                    $($($normal_field,)*)*
                    $($($optional_field,)*)*
                    $($($bencode_field,)*)*
                })
            }
        }

        impl<'a> TryFrom<&'a BencodeValue> for $type<'a> {
            type Error = RsbtError;

            fn try_from(value: &'a BencodeValue) -> Result<Self, Self::Error> {
                let dictionary: &BencodeDictionary = value
                    .try_into()
                    .map_err(|e| RsbtError::invalid_schema("", e))?;
                dictionary.try_into()
            }
        }
    };
}

/// Builds a [`BencodeValue::Dictionary`] from `key => value` pairs.
#[macro_export]
macro_rules! bencode_dictionary {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut dictionary = $crate::RsbtBencodeDictionary::new();
        $(dictionary.insert(Vec::from($key.as_bytes()), $crate::RsbtBencodeValue::from($value));)*
        $crate::RsbtBencodeValue::Dictionary(dictionary)
    }};
}
