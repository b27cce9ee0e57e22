//! The table of supported encodings.
//!
//! Each encoding has exactly one [`Entry`] naming its prefix symbol,
//! canonical name, codec, padding and case policy. Lookups by symbol and by
//! name go through maps built on first use and never modified afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::codec::{self, Codec};
use crate::encoding::{Case, Encoding};
use crate::error::{Error, Result};

use Case::{Insensitive, Sensitive};

/// Registry metadata for one supported encoding.
pub struct Entry {
    name: &'static str,
    encoding: Encoding,
    padded: bool,
    case: Case,
    pub(crate) codec: &'static Codec,
}

impl Entry {
    const fn new(
        name: &'static str,
        encoding: Encoding,
        padded: bool,
        case: Case,
        codec: &'static Codec,
    ) -> Self {
        Entry {
            name,
            encoding,
            padded,
            case,
            codec,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Whether the output is padded with `'='` to a whole block.
    pub fn is_padded(&self) -> bool {
        self.padded
    }

    pub fn case(&self) -> Case {
        self.case
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("encoding", &self.encoding)
            .field("padded", &self.padded)
            .field("case", &self.case)
            .finish()
    }
}

static ENTRIES: [Entry; 22] = [
    Entry::new("identity", Encoding::IDENTITY, false, Sensitive, &codec::IDENTITY),
    Entry::new("base2", Encoding::BASE2, false, Sensitive, &codec::BASE2),
    Entry::new("base8", Encoding::BASE8, false, Sensitive, &codec::BASE8),
    Entry::new("base16", Encoding::BASE16, false, Insensitive, &codec::BASE16),
    Entry::new("base16upper", Encoding::BASE16_UPPER, false, Insensitive, &codec::BASE16_UPPER),
    Entry::new("base32", Encoding::BASE32, false, Insensitive, &codec::BASE32),
    Entry::new("base32upper", Encoding::BASE32_UPPER, false, Insensitive, &codec::BASE32_UPPER),
    Entry::new("base32pad", Encoding::BASE32_PAD, true, Insensitive, &codec::BASE32_PAD),
    Entry::new(
        "base32padupper",
        Encoding::BASE32_PAD_UPPER,
        true,
        Insensitive,
        &codec::BASE32_PAD_UPPER,
    ),
    Entry::new("base32hex", Encoding::BASE32_HEX, false, Insensitive, &codec::BASE32_HEX),
    Entry::new(
        "base32hexupper",
        Encoding::BASE32_HEX_UPPER,
        false,
        Insensitive,
        &codec::BASE32_HEX_UPPER,
    ),
    Entry::new("base32hexpad", Encoding::BASE32_HEX_PAD, true, Insensitive, &codec::BASE32_HEX_PAD),
    Entry::new(
        "base32hexpadupper",
        Encoding::BASE32_HEX_PAD_UPPER,
        true,
        Insensitive,
        &codec::BASE32_HEX_PAD_UPPER,
    ),
    Entry::new("base36", Encoding::BASE36, false, Insensitive, &codec::BASE36),
    Entry::new("base36upper", Encoding::BASE36_UPPER, false, Insensitive, &codec::BASE36_UPPER),
    Entry::new("base58btc", Encoding::BASE58_BTC, false, Sensitive, &codec::BASE58_BTC),
    Entry::new("base58flickr", Encoding::BASE58_FLICKR, false, Sensitive, &codec::BASE58_FLICKR),
    Entry::new("base64", Encoding::BASE64, false, Sensitive, &codec::BASE64),
    Entry::new("base64pad", Encoding::BASE64_PAD, true, Sensitive, &codec::BASE64_PAD),
    Entry::new("base64url", Encoding::BASE64_URL, false, Sensitive, &codec::BASE64_URL),
    Entry::new("base64urlpad", Encoding::BASE64_URL_PAD, true, Sensitive, &codec::BASE64_URL_PAD),
    Entry::new("base256emoji", Encoding::BASE256_EMOJI, false, Sensitive, &codec::BASE256_EMOJI),
];

static BY_CODE: Lazy<HashMap<Encoding, &'static Entry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.encoding, entry)).collect());

static BY_NAME: Lazy<HashMap<&'static str, &'static Entry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.name, entry)).collect());

/// Look up the registry entry of an encoding.
pub fn lookup(encoding: Encoding) -> Result<&'static Entry> {
    BY_CODE
        .get(&encoding)
        .copied()
        .ok_or_else(|| Error::unsupported_code(encoding.code()))
}

/// Resolve a canonical name, or the single prefix symbol of an encoding's
/// output, to the encoding.
///
/// Names are matched exactly, so `"Base58BTC"` is not `"base58btc"`.
pub fn encoding_by_name(name: &str) -> Result<Encoding> {
    if let Some(entry) = BY_NAME.get(name) {
        return Ok(entry.encoding);
    }

    let mut chars = name.chars();
    if let (Some(symbol), None) = (chars.next(), chars.next()) {
        if let Some(entry) = BY_CODE.get(&Encoding::from(symbol)) {
            return Ok(entry.encoding);
        }
    }

    Err(Error::UnsupportedEncoding(name.to_owned()))
}

/// All supported encodings as `(name, encoding)` pairs, in registry order.
pub fn encodings() -> impl Iterator<Item = (&'static str, Encoding)> {
    ENTRIES.iter().map(|entry| (entry.name, entry.encoding))
}

/// All registry entries, in registry order.
pub fn entries() -> &'static [Entry] {
    &ENTRIES
}
