//! Validated encoder handles.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::encoding::Encoding;
use crate::engine;
use crate::error::{Error, Result};
use crate::registry;

/// Encoding used when an [`Encoder`] is built without naming one.
pub const DEFAULT_ENCODING: Encoding = Encoding::BASE58_BTC;

/// The ways an [`Encoder`] can be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Numeric value of the prefix symbol.
    Code(u32),
    /// The prefix symbol itself.
    Symbol(char),
    /// A canonical name such as `"base64url"`, or a one-symbol prefix.
    Name(&'a str),
    /// [`DEFAULT_ENCODING`].
    Default,
}

impl From<Encoding> for Selector<'_> {
    fn from(encoding: Encoding) -> Self {
        Selector::Code(u32::from(encoding.code()))
    }
}

impl From<u32> for Selector<'_> {
    fn from(code: u32) -> Self {
        Selector::Code(code)
    }
}

impl From<char> for Selector<'_> {
    fn from(symbol: char) -> Self {
        Selector::Symbol(symbol)
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    /// Empty text selects the default, one symbol selects by prefix and
    /// anything longer is a name.
    fn from(text: &'a str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Selector::Default,
            (Some(symbol), None) => Selector::Symbol(symbol),
            _ => Selector::Name(text),
        }
    }
}

impl<'a, T: Into<Selector<'a>>> From<Option<T>> for Selector<'a> {
    fn from(selector: Option<T>) -> Self {
        selector.map_or(Selector::Default, Into::into)
    }
}

/// An encoding checked against the registry once, at construction.
///
/// ```
/// use multibase::{Encoder, Encoding};
///
/// let encoder = Encoder::new("base16upper").unwrap();
/// assert_eq!(Encoding::BASE16_UPPER, encoder.encoding());
/// assert_eq!(b"F616263".to_vec(), encoder.encode(b"abc"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoder {
    encoding: Encoding,
}

impl Encoder {
    pub fn new<'a>(selector: impl Into<Selector<'a>>) -> Result<Self> {
        let encoding = match selector.into() {
            Selector::Code(code) => char::from_u32(code)
                .map(Encoding::from)
                .ok_or_else(|| Error::UnsupportedEncoding(format!("{code:#x}")))?,
            Selector::Symbol(symbol) => Encoding::from(symbol),
            Selector::Name(name) => return Self::by_name(name),
            Selector::Default => DEFAULT_ENCODING,
        };
        registry::lookup(encoding)?;
        Ok(Encoder { encoding })
    }

    /// Strict name lookup: unlike [`Encoder::new`], an empty name fails.
    pub fn by_name(name: &str) -> Result<Self> {
        let encoding = registry::encoding_by_name(name)?;
        Ok(Encoder { encoding })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode `data` with this encoder's encoding, as the UTF-8 bytes of
    /// multibase text. Any bytes are accepted, identity included.
    ///
    /// # Panics
    ///
    /// Only if a registered encoding fails to encode, which the registry
    /// tests rule out.
    pub fn encode(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        match engine::encode_to_vec(self.encoding, data.as_ref()) {
            Ok(text) => text,
            Err(err) => panic!("multibase encoder {} failed: {err}", self.encoding),
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            encoding: DEFAULT_ENCODING,
        }
    }
}

impl FromStr for Encoder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Encoder::new(s)
    }
}

impl Display for Encoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encoding)
    }
}
