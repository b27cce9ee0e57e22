//! # multibase
//!
//! Self-describing base encodings. Encoded text starts with one symbol
//! naming the base it was written in, so a decoder recovers both the bytes
//! and the encoding without any side channel:
//!
//! ```text
//! f616263       base16, "abc"
//! zZiCa         base58btc, "abc"
//! mYWJj         base64, "abc"
//! ```
//!
//! ## Usage
//!
//! ```
//! use multibase::{Encoder, Encoding, decode, encode};
//!
//! let text = encode(Encoding::BASE58_BTC, &[0, 0, 1, 2]).unwrap();
//! assert_eq!("z115T", text);
//!
//! let (encoding, data) = decode(&text).unwrap();
//! assert_eq!(Encoding::BASE58_BTC, encoding);
//! assert_eq!(vec![0, 0, 1, 2], data);
//!
//! // validate once, encode many times
//! let encoder = Encoder::new("base32").unwrap();
//! assert_eq!(b"bmfrgg".to_vec(), encoder.encode(b"abc"));
//! ```

#![forbid(unsafe_code)]

mod base2;
mod base36;
mod base8;
mod codec;
mod emoji;
mod encoder;
mod encoding;
mod engine;
pub mod error;
mod options;
pub mod registry;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use sigil::decoder::{DecodableFrom, Decoder};
use sigil::encoder::{EncodableTo, Encoder as _};

pub use encoder::{DEFAULT_ENCODING, Encoder, Selector};
pub use encoding::{Case, Encoding};
pub use engine::{decode, decode_bytes, decode_with, encode, encode_to_vec, transcode};
pub use error::{Error, Malformed, Result};
pub use options::{DecodeOptions, Misaligned};
pub use registry::{encoding_by_name, encodings};

/// Decoded multibase: the payload together with the encoding it came in.
///
/// Every value can be written back as text, so identity values hold UTF-8.
/// Use [`encode_to_vec`] and [`decode_bytes`] for arbitrary identity bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multibase {
    encoding: Encoding,
    data: Vec<u8>,
}

impl Multibase {
    /// Pair `data` with a registered encoding.
    ///
    /// # Errors
    ///
    /// `UnsupportedEncoding` for an unregistered code, and
    /// `MalformedInput(NotText)` for identity data that is not UTF-8.
    pub fn new(encoding: Encoding, data: Vec<u8>) -> Result<Self> {
        let entry = registry::lookup(encoding)?;
        if entry.codec.verbatim {
            std::str::from_utf8(&data).map_err(|err| Malformed::NotText {
                valid_up_to: err.valid_up_to(),
            })?;
        }
        Ok(Multibase { encoding, data })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The same payload under another encoding.
    pub fn with_encoding(self, encoding: Encoding) -> Result<Self> {
        Multibase::new(encoding, self.data)
    }
}

impl FromStr for Multibase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (encoding, data) = decode(s)?;
        Ok(Multibase { encoding, data })
    }
}

impl Display for Multibase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // `new` and `from_str` only admit values that encode to text.
        match encode(self.encoding, &self.data) {
            Ok(text) => f.write_str(&text),
            Err(err) => unreachable!("multibase {} failed to encode: {err}", self.encoding),
        }
    }
}

impl DecodableFrom<&str> for Multibase {}

impl Decoder<&str, Multibase> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Multibase> {
        Multibase::from_str(self)
    }
}

impl DecodableFrom<String> for Multibase {}

impl Decoder<String, Multibase> for String {
    type Error = Error;

    fn decode(&self) -> Result<Multibase> {
        Multibase::from_str(self)
    }
}

impl DecodableFrom<Multibase> for Vec<u8> {}

impl Decoder<Multibase, Vec<u8>> for Multibase {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>> {
        // This discards the encoding.
        Ok(self.data.clone())
    }
}

impl EncodableTo<Multibase> for String {}

impl sigil::encoder::Encoder<Multibase, String> for Multibase {
    type Error = Error;

    fn encode(&self) -> Result<String> {
        encode(self.encoding, &self.data)
    }
}
