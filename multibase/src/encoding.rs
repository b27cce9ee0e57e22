//! Multibase encoding identifiers.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::Error;
use crate::registry;

/// A multibase encoding, identified by the single symbol that prefixes its
/// output.
///
/// Any `char` can be wrapped, but only the codes listed in the registry are
/// supported. [`crate::encode`] and [`crate::Encoder::new`] reject the rest
/// with [`Error::UnsupportedEncoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Encoding(char);

impl Encoding {
    /// Payload carried verbatim after a NUL prefix.
    pub const IDENTITY: Encoding = Encoding('\0');
    pub const BASE2: Encoding = Encoding('0');
    pub const BASE8: Encoding = Encoding('7');
    pub const BASE16: Encoding = Encoding('f');
    pub const BASE16_UPPER: Encoding = Encoding('F');
    pub const BASE32: Encoding = Encoding('b');
    pub const BASE32_UPPER: Encoding = Encoding('B');
    pub const BASE32_PAD: Encoding = Encoding('c');
    pub const BASE32_PAD_UPPER: Encoding = Encoding('C');
    pub const BASE32_HEX: Encoding = Encoding('v');
    pub const BASE32_HEX_UPPER: Encoding = Encoding('V');
    pub const BASE32_HEX_PAD: Encoding = Encoding('t');
    pub const BASE32_HEX_PAD_UPPER: Encoding = Encoding('T');
    pub const BASE36: Encoding = Encoding('k');
    pub const BASE36_UPPER: Encoding = Encoding('K');
    pub const BASE58_BTC: Encoding = Encoding('z');
    pub const BASE58_FLICKR: Encoding = Encoding('Z');
    pub const BASE64: Encoding = Encoding('m');
    pub const BASE64_PAD: Encoding = Encoding('M');
    pub const BASE64_URL: Encoding = Encoding('u');
    pub const BASE64_URL_PAD: Encoding = Encoding('U');
    pub const BASE256_EMOJI: Encoding = Encoding('\u{1F680}');

    /// The prefix symbol.
    pub const fn code(self) -> char {
        self.0
    }

    /// Canonical name, or `None` when the code is not registered.
    pub fn name(self) -> Option<&'static str> {
        registry::lookup(self).ok().map(|entry| entry.name())
    }

    pub fn is_supported(self) -> bool {
        registry::lookup(self).is_ok()
    }
}

impl From<char> for Encoding {
    fn from(code: char) -> Self {
        Encoding(code)
    }
}

impl From<Encoding> for char {
    fn from(encoding: Encoding) -> Self {
        encoding.0
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "U+{:04X}", u32::from(self.0)),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Accepts a canonical name or a single prefix symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::encoding_by_name(s)
    }
}

/// How a decoder treats letter case in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Only the exact symbols of the alphabet are accepted.
    Sensitive,
    /// Upper and lower case forms of a letter decode identically.
    Insensitive,
}
