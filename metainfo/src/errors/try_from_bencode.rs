use failure::*;

#[derive(Debug, Fail, PartialEq)]
pub enum TryFromBencode {
    #[fail(display = "required key is missing")]
    Missing,
    #[fail(display = "not a string bencode")]
    NotString,
    #[fail(display = "not an integer bencode")]
    NotInteger,
    #[fail(display = "not a list bencode")]
    NotList,
    #[fail(display = "not a dictionary bencode")]
    NotDictionary,
    #[fail(display = "negative integer {}", _0)]
    Negative(i64),
    #[fail(display = "empty path")]
    EmptyPath,
}
