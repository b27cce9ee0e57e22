//! Codec descriptors.
//!
//! A [`Codec`] is a pair of functions over the payload (the text after the
//! prefix) plus the metadata the dispatcher needs to prepare a payload
//! before decoding. Upper and lower case variants of one alphabet share a
//! decode function.
//!
//! Hex and base32 delegate to `data-encoding`, base58 to `bs58` and base64
//! to `base64`. Those crates own alphabet, padding and leading-zero
//! handling; the adapters here only pick the right variant.

use base64::{
    Engine,
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD},
};

use crate::error::{Error, Malformed, Result};
use crate::{base2, base8, base36, emoji};

/// The letter case a codec's decoder expects. Case-insensitive registry
/// entries fold their payload to this before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fold {
    Lower,
    Upper,
    /// The alphabet mixes cases or has no letters.
    Never,
}

pub(crate) struct Codec {
    pub(crate) encode: fn(&[u8]) -> Result<String>,
    pub(crate) decode: fn(&str) -> Result<Vec<u8>>,
    pub(crate) fold: Fold,
    /// Digits per byte for fixed-width digit codecs.
    pub(crate) group: Option<usize>,
    /// The payload is the data itself, so byte-level text may carry any
    /// bytes after the prefix.
    pub(crate) verbatim: bool,
}

pub(crate) fn invalid_symbol(payload: &str, offset: usize) -> Error {
    let symbol = payload
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Malformed::InvalidSymbol { symbol, offset }.into()
}

pub(crate) static IDENTITY: Codec = Codec {
    encode: identity_encode,
    decode: identity_decode,
    fold: Fold::Never,
    group: None,
    verbatim: true,
};

pub(crate) static BASE2: Codec = Codec {
    encode: |data| Ok(base2::encode(data)),
    decode: base2::decode,
    fold: Fold::Never,
    group: Some(base2::DIGITS_PER_BYTE),
    verbatim: false,
};

pub(crate) static BASE8: Codec = Codec {
    encode: |data| Ok(base8::encode(data)),
    decode: base8::decode,
    fold: Fold::Never,
    group: Some(base8::DIGITS_PER_BYTE),
    verbatim: false,
};

pub(crate) static BASE16: Codec = Codec {
    encode: |data| Ok(data_encoding::HEXLOWER.encode(data)),
    decode: hex_decode,
    fold: Fold::Lower,
    group: None,
    verbatim: false,
};

pub(crate) static BASE16_UPPER: Codec = Codec {
    encode: |data| Ok(data_encoding::HEXUPPER.encode(data)),
    decode: hex_decode,
    fold: Fold::Lower,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32_NOPAD.encode(data).to_ascii_lowercase()),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32_NOPAD, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32_UPPER: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32_NOPAD.encode(data)),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32_NOPAD, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32_PAD: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32.encode(data).to_ascii_lowercase()),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32_PAD_UPPER: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32.encode(data)),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32_HEX: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32HEX_NOPAD.encode(data).to_ascii_lowercase()),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32HEX_NOPAD, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32_HEX_UPPER: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32HEX_NOPAD.encode(data)),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32HEX_NOPAD, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32_HEX_PAD: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32HEX.encode(data).to_ascii_lowercase()),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32HEX, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE32_HEX_PAD_UPPER: Codec = Codec {
    encode: |data| Ok(data_encoding::BASE32HEX.encode(data)),
    decode: |payload| data_encoding_decode(&data_encoding::BASE32HEX, payload),
    fold: Fold::Upper,
    group: None,
    verbatim: false,
};

pub(crate) static BASE36: Codec = Codec {
    encode: |data| Ok(base36::encode(data)),
    decode: base36::decode,
    fold: Fold::Lower,
    group: None,
    verbatim: false,
};

pub(crate) static BASE36_UPPER: Codec = Codec {
    encode: |data| Ok(base36::encode(data).to_ascii_uppercase()),
    decode: base36::decode,
    fold: Fold::Lower,
    group: None,
    verbatim: false,
};

pub(crate) static BASE58_BTC: Codec = Codec {
    encode: |data| {
        Ok(bs58::encode(data)
            .with_alphabet(bs58::Alphabet::BITCOIN)
            .into_string())
    },
    decode: |payload| base58_decode(bs58::Alphabet::BITCOIN, payload),
    fold: Fold::Never,
    group: None,
    verbatim: false,
};

pub(crate) static BASE58_FLICKR: Codec = Codec {
    encode: |data| {
        Ok(bs58::encode(data)
            .with_alphabet(bs58::Alphabet::FLICKR)
            .into_string())
    },
    decode: |payload| base58_decode(bs58::Alphabet::FLICKR, payload),
    fold: Fold::Never,
    group: None,
    verbatim: false,
};

pub(crate) static BASE64: Codec = Codec {
    encode: |data| Ok(STANDARD_NO_PAD.encode(data)),
    decode: |payload| base64_decode(&STANDARD_NO_PAD, payload),
    fold: Fold::Never,
    group: None,
    verbatim: false,
};

pub(crate) static BASE64_PAD: Codec = Codec {
    encode: |data| Ok(STANDARD.encode(data)),
    decode: |payload| base64_decode(&STANDARD, payload),
    fold: Fold::Never,
    group: None,
    verbatim: false,
};

pub(crate) static BASE64_URL: Codec = Codec {
    encode: |data| Ok(URL_SAFE_NO_PAD.encode(data)),
    decode: |payload| base64_decode(&URL_SAFE_NO_PAD, payload),
    fold: Fold::Never,
    group: None,
    verbatim: false,
};

pub(crate) static BASE64_URL_PAD: Codec = Codec {
    encode: |data| Ok(URL_SAFE.encode(data)),
    decode: |payload| base64_decode(&URL_SAFE, payload),
    fold: Fold::Never,
    group: None,
    verbatim: false,
};

pub(crate) static BASE256_EMOJI: Codec = Codec {
    encode: |data| Ok(emoji::encode(data)),
    decode: emoji::decode,
    fold: Fold::Never,
    group: None,
    verbatim: false,
};

fn identity_encode(data: &[u8]) -> Result<String> {
    std::str::from_utf8(data)
        .map(str::to_owned)
        .map_err(|e| {
            Error::from(Malformed::NotText {
                valid_up_to: e.valid_up_to(),
            })
        })
}

fn identity_decode(payload: &str) -> Result<Vec<u8>> {
    Ok(payload.as_bytes().to_vec())
}

fn hex_decode(payload: &str) -> Result<Vec<u8>> {
    data_encoding_decode(&data_encoding::HEXLOWER, payload)
}

fn data_encoding_decode(encoding: &data_encoding::Encoding, payload: &str) -> Result<Vec<u8>> {
    Ok(encoding
        .decode(payload.as_bytes())
        .map_err(Malformed::DataEncoding)?)
}

fn base58_decode(alphabet: &bs58::Alphabet, payload: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(payload)
        .with_alphabet(alphabet)
        .into_vec()
        .map_err(Malformed::Base58)?)
}

fn base64_decode<E: Engine>(engine: &E, payload: &str) -> Result<Vec<u8>> {
    Ok(engine.decode(payload).map_err(Malformed::Base64)?)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{BASE16, BASE32_PAD, BASE58_BTC, BASE64_PAD, Codec, IDENTITY};
    use crate::error::{Error, Malformed};

    #[rstest]
    #[case::hex(&BASE16, b"abc".to_vec(), "616263")]
    #[case::base32_pad(&BASE32_PAD, b"f".to_vec(), "my======")]
    #[case::base58_zeros(&BASE58_BTC, vec![0, 0, 1, 2], "115T")]
    #[case::base64_pad(&BASE64_PAD, b"ab".to_vec(), "YWI=")]
    #[case::identity(&IDENTITY, b"abc".to_vec(), "abc")]
    fn test_codec(#[case] codec: &Codec, #[case] data: Vec<u8>, #[case] expected: &str) {
        assert_eq!(expected, (codec.encode)(&data).unwrap());
    }

    #[test]
    fn test_identity_requires_text() {
        assert_eq!(
            Err(Error::MalformedInput(Malformed::NotText { valid_up_to: 1 })),
            (IDENTITY.encode)(&[b'a', 0xff])
        );
    }

    #[test]
    fn test_only_identity_is_verbatim() {
        for entry in crate::registry::entries() {
            assert_eq!(
                entry.encoding() == crate::Encoding::IDENTITY,
                entry.codec.verbatim,
                "{}",
                entry.name()
            );
        }
    }

    #[test]
    fn test_invalid_symbol_past_end() {
        assert_eq!(
            Error::MalformedInput(Malformed::InvalidSymbol {
                symbol: char::REPLACEMENT_CHARACTER,
                offset: 9
            }),
            super::invalid_symbol("abc", 9)
        );
    }
}
