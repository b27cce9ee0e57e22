use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the multibase registry, encoder and decoder.
///
/// Every failure is an ordinary value. Unknown codes and names surface as
/// `UnsupportedEncoding`; problems with the text after the prefix surface as
/// `MalformedInput` or `Overflow`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The code, prefix symbol or name is not in the registry.
    #[error("unsupported multibase encoding: {0}")]
    UnsupportedEncoding(String),

    /// There is no prefix symbol to read.
    #[error("cannot decode multibase from an empty string")]
    EmptyInput,

    /// The payload is not valid for the encoding named by its prefix.
    #[error("malformed multibase payload: {0}")]
    MalformedInput(#[from] Malformed),

    /// A fixed-width digit group decodes to a value above 255.
    #[error("digit group {group:?} at offset {offset} does not fit in a byte")]
    Overflow { group: String, offset: usize },
}

impl Error {
    pub(crate) fn unsupported_code(code: char) -> Self {
        Error::UnsupportedEncoding(format!("{code:?} (U+{:04X})", u32::from(code)))
    }
}

/// Why a payload was rejected.
///
/// Offsets are byte offsets into the payload, the text after the prefix.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Malformed {
    #[error("length {len} is not a multiple of {multiple}")]
    Length { len: usize, multiple: usize },

    #[error("invalid symbol {symbol:?} at offset {offset}")]
    InvalidSymbol { symbol: char, offset: usize },

    /// Bytes that have to be text are not: identity data bound for a
    /// `String`, or a non-identity payload read with `decode_bytes`.
    #[error("payload is not UTF-8 text (valid up to byte {valid_up_to})")]
    NotText { valid_up_to: usize },

    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    DataEncoding(#[from] data_encoding::DecodeError),

    #[error("base58: {0}")]
    Base58(#[from] bs58::decode::Error),
}
