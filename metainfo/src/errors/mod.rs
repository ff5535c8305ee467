mod rsbt_error;
mod try_from_bencode;

pub use rsbt_error::RsbtError;
pub use try_from_bencode::TryFromBencode;
