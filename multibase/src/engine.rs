//! Encode and decode dispatch.

use std::borrow::Cow;

use crate::codec::Fold;
use crate::encoding::{Case, Encoding};
use crate::error::{Error, Malformed, Result};
use crate::options::{DecodeOptions, Misaligned};
use crate::registry::{self, Entry};

/// Encode `data` with `encoding`, prefixed by the encoding's symbol.
///
/// # Errors
///
/// `UnsupportedEncoding` when the code is not registered, and
/// `MalformedInput` when identity is asked to carry bytes that are not
/// UTF-8 text. [`encode_to_vec`] has no such restriction.
///
/// # Example
/// ```
/// use multibase::{Encoding, encode};
///
/// assert_eq!("f616263", encode(Encoding::BASE16, b"abc").unwrap());
/// ```
pub fn encode(encoding: Encoding, data: &[u8]) -> Result<String> {
    let entry = registry::lookup(encoding)?;
    let payload = (entry.codec.encode)(data)?;

    let prefix = encoding.code();
    let mut text = String::with_capacity(prefix.len_utf8() + payload.len());
    text.push(prefix);
    text.push_str(&payload);

    tracing::trace!(encoding = entry.name(), bytes = data.len(), "encoded multibase");
    Ok(text)
}

/// Encode `data` into the UTF-8 bytes of multibase text.
///
/// Identity copies `data` verbatim behind its prefix, so unlike [`encode`]
/// this accepts any bytes for every registered encoding.
///
/// # Example
/// ```
/// use multibase::{Encoding, encode_to_vec};
///
/// let text = encode_to_vec(Encoding::IDENTITY, &[0x80, 0xff]).unwrap();
/// assert_eq!(b"\0\x80\xff".to_vec(), text);
/// assert_eq!(b"f80ff".to_vec(), encode_to_vec(Encoding::BASE16, &[0x80, 0xff]).unwrap());
/// ```
pub fn encode_to_vec(encoding: Encoding, data: &[u8]) -> Result<Vec<u8>> {
    let entry = registry::lookup(encoding)?;
    if !entry.codec.verbatim {
        return encode(encoding, data).map(String::into_bytes);
    }

    let mut prefix = [0; 4];
    let prefix = encoding.code().encode_utf8(&mut prefix).as_bytes();
    let mut text = Vec::with_capacity(prefix.len() + data.len());
    text.extend_from_slice(prefix);
    text.extend_from_slice(data);

    tracing::trace!(encoding = entry.name(), bytes = data.len(), "encoded multibase");
    Ok(text)
}

/// Decode multibase text into its encoding and payload bytes.
///
/// # Example
/// ```
/// use multibase::{Encoding, decode};
///
/// let (encoding, data) = decode("f616263").unwrap();
/// assert_eq!(Encoding::BASE16, encoding);
/// assert_eq!(b"abc".to_vec(), data);
/// ```
pub fn decode(text: &str) -> Result<(Encoding, Vec<u8>)> {
    decode_with(text, &DecodeOptions::default())
}

/// [`decode`] with explicit options.
pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<(Encoding, Vec<u8>)> {
    let mut chars = text.chars();
    let prefix = chars.next().ok_or(Error::EmptyInput)?;
    let entry = registry::lookup(Encoding::from(prefix))?;
    decode_payload(entry, chars.as_str(), options)
}

/// Decode multibase text held as bytes, the inverse of [`encode_to_vec`].
///
/// The prefix must be UTF-8. After it, identity takes the bytes as they
/// are and every other encoding requires UTF-8 text.
pub fn decode_bytes(text: &[u8]) -> Result<(Encoding, Vec<u8>)> {
    let head = match std::str::from_utf8(text) {
        Ok(head) => head,
        Err(err) => std::str::from_utf8(&text[..err.valid_up_to()]).unwrap_or_default(),
    };
    let Some(prefix) = head.chars().next() else {
        return match text.first() {
            None => Err(Error::EmptyInput),
            Some(byte) => Err(Error::UnsupportedEncoding(format!("byte {byte:#04x}"))),
        };
    };
    let entry = registry::lookup(Encoding::from(prefix))?;
    let payload = &text[prefix.len_utf8()..];

    if entry.codec.verbatim {
        tracing::trace!(encoding = entry.name(), bytes = payload.len(), "decoded multibase");
        return Ok((entry.encoding(), payload.to_vec()));
    }
    let payload = std::str::from_utf8(payload).map_err(|err| Malformed::NotText {
        valid_up_to: err.valid_up_to(),
    })?;
    decode_payload(entry, payload, &DecodeOptions::default())
}

/// Decode `text` and encode the payload again with `target`.
pub fn transcode(text: &str, target: Encoding) -> Result<String> {
    let (_, data) = decode(text)?;
    encode(target, &data)
}

fn decode_payload(
    entry: &Entry,
    payload: &str,
    options: &DecodeOptions,
) -> Result<(Encoding, Vec<u8>)> {
    let (payload, pad) = prepare(entry, payload, options);
    let data = (entry.codec.decode)(&payload)
        .map_err(|err| unpad_offset(err, pad))
        .inspect_err(|err| {
            tracing::debug!(encoding = entry.name(), "rejected multibase payload: {err}");
        })?;

    tracing::trace!(encoding = entry.name(), bytes = data.len(), "decoded multibase");
    Ok((entry.encoding(), data))
}

/// Bring a payload into the form the codec's decoder reads: fold the case
/// of case-insensitive entries, and zero-pad misaligned digit groups when
/// configured to. Returns the number of digits padded in front.
fn prepare<'a>(entry: &Entry, payload: &'a str, options: &DecodeOptions) -> (Cow<'a, str>, usize) {
    let mut payload = Cow::Borrowed(payload);

    if entry.case() == Case::Insensitive {
        match entry.codec.fold {
            Fold::Lower if payload.bytes().any(|b| b.is_ascii_uppercase()) => {
                payload = Cow::Owned(payload.to_ascii_lowercase());
            }
            Fold::Upper if payload.bytes().any(|b| b.is_ascii_lowercase()) => {
                payload = Cow::Owned(payload.to_ascii_uppercase());
            }
            _ => {}
        }
    }

    let mut pad = 0;
    if let (Misaligned::ZeroPad, Some(group)) = (options.misaligned, entry.codec.group) {
        let partial = payload.len() % group;
        if partial != 0 {
            pad = group - partial;
            payload = Cow::Owned("0".repeat(pad) + &payload);
        }
    }

    (payload, pad)
}

/// Report offsets against the caller's payload rather than the padded one.
/// Padding digits are zeros, so neither error can start inside them.
fn unpad_offset(err: Error, pad: usize) -> Error {
    match err {
        Error::MalformedInput(Malformed::InvalidSymbol { symbol, offset }) => {
            Malformed::InvalidSymbol {
                symbol,
                offset: offset.saturating_sub(pad),
            }
            .into()
        }
        Error::Overflow { group, offset } => Error::Overflow {
            group,
            offset: offset.saturating_sub(pad),
        },
        err => err,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{decode, decode_bytes, decode_with, encode, encode_to_vec, transcode};
    use crate::encoding::Encoding;
    use crate::error::{Error, Malformed};
    use crate::options::{DecodeOptions, Misaligned};
    use crate::registry::encodings;

    #[rstest]
    #[case::hex(Encoding::BASE16, "f616263")]
    #[case::hex_upper(Encoding::BASE16_UPPER, "F616263")]
    #[case::identity(Encoding::IDENTITY, "\0abc")]
    #[case::binary(Encoding::BASE2, "0011000010110001001100011")]
    #[case::octal(Encoding::BASE8, "7141142143")]
    #[case::base32(Encoding::BASE32, "bmfrgg")]
    #[case::base32_pad_upper(Encoding::BASE32_PAD_UPPER, "CMFRGG===")]
    #[case::base58btc(Encoding::BASE58_BTC, "zZiCa")]
    #[case::base64(Encoding::BASE64, "mYWJj")]
    fn test_encode_abc(#[case] encoding: Encoding, #[case] expected: &str) {
        assert_eq!(expected, encode(encoding, b"abc").unwrap());
        assert_eq!((encoding, b"abc".to_vec()), decode(expected).unwrap());
    }

    #[test]
    fn test_encode_prefixes_code() {
        for (_, encoding) in encodings() {
            let text = encode(encoding, b"prefix").unwrap();
            assert_eq!(Some(encoding.code()), text.chars().next());
        }
    }

    #[test]
    fn test_encode_unsupported() {
        assert_eq!(
            Err(Error::UnsupportedEncoding("'q' (U+0071)".to_string())),
            encode(Encoding::from('q'), b"abc")
        );
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(Err(Error::EmptyInput), decode(""));
    }

    #[rstest]
    #[case::unknown("qabc")]
    #[case::base10("9123")]
    #[case::space(" abc")]
    fn test_decode_unknown_prefix(#[case] text: &str) {
        assert!(matches!(decode(text), Err(Error::UnsupportedEncoding(_))));
    }

    #[rstest]
    #[case::binary("0101", Malformed::Length { len: 3, multiple: 8 })]
    #[case::octal("71411", Malformed::Length { len: 4, multiple: 3 })]
    #[case::binary_digit("000000012", Malformed::InvalidSymbol { symbol: '2', offset: 7 })]
    fn test_decode_misaligned_rejected(#[case] text: &str, #[case] expected: Malformed) {
        assert_eq!(Err(Error::MalformedInput(expected)), decode(text));
    }

    #[test]
    fn test_decode_odd_hex() {
        assert!(matches!(
            decode("f616"),
            Err(Error::MalformedInput(Malformed::DataEncoding(_)))
        ));
    }

    #[rstest]
    #[case::binary("0101", vec![0x05])]
    #[case::binary_aligned("000000101", vec![0x05])]
    #[case::octal("75", vec![0x05])]
    #[case::octal_aligned("7141", vec![0x61])]
    #[case::octal_two_digits("714", vec![0o14])]
    fn test_decode_zero_pad(#[case] text: &str, #[case] expected: Vec<u8>) {
        let options = DecodeOptions::new().misaligned(Misaligned::ZeroPad);
        assert_eq!(expected, decode_with(text, &options).unwrap().1);
    }

    #[test]
    fn test_zero_pad_leaves_other_codecs_alone() {
        let options = DecodeOptions::new().misaligned(Misaligned::ZeroPad);
        assert!(decode_with("f616", &options).is_err());
    }

    #[rstest]
    #[case::binary("0012", Error::MalformedInput(Malformed::InvalidSymbol { symbol: '2', offset: 2 }))]
    #[case::octal("701400", Error::Overflow { group: "400".to_string(), offset: 2 })]
    #[case::octal_digit("7189", Error::MalformedInput(Malformed::InvalidSymbol { symbol: '8', offset: 1 }))]
    fn test_zero_pad_offsets_point_into_input(#[case] text: &str, #[case] expected: Error) {
        let options = DecodeOptions::new().misaligned(Misaligned::ZeroPad);
        assert_eq!(Err(expected), decode_with(text, &options));
    }

    #[test]
    fn test_decode_octal_overflow() {
        assert_eq!(
            Err(Error::Overflow {
                group: "400".to_string(),
                offset: 0
            }),
            decode("7400")
        );
    }

    #[rstest]
    #[case::hex_mixed("f6A6b63", Encoding::BASE16, b"jkc")]
    #[case::hex_upper_prefix_lower_payload("F6a6b63", Encoding::BASE16_UPPER, b"jkc")]
    #[case::base32_upper_payload("bMFRGG", Encoding::BASE32, b"abc")]
    #[case::base32_mixed("BmFrGg", Encoding::BASE32_UPPER, b"abc")]
    #[case::base32_pad_lower("Cmfrgg===", Encoding::BASE32_PAD_UPPER, b"abc")]
    #[case::base36_upper("kLHK", Encoding::BASE36, b"l\xc8")]
    fn test_decode_case_insensitive(
        #[case] text: &str,
        #[case] encoding: Encoding,
        #[case] expected: &[u8],
    ) {
        assert_eq!((encoding, expected.to_vec()), decode(text).unwrap());
    }

    #[test]
    fn test_decode_base64_is_case_sensitive() {
        let (_, data) = decode("mywjj").unwrap();
        assert_ne!(b"abc".to_vec(), data);
    }

    #[test]
    fn test_transcode() {
        assert_eq!("mYWJj", transcode("f616263", Encoding::BASE64).unwrap());
        assert_eq!(
            Err(Error::UnsupportedEncoding("'q' (U+0071)".to_string())),
            transcode("f616263", Encoding::from('q'))
        );
    }

    #[rstest]
    #[case::binary_identity(Encoding::IDENTITY, vec![0, 0x80, 0xff], b"\0\0\x80\xff".to_vec())]
    #[case::empty_identity(Encoding::IDENTITY, vec![], b"\0".to_vec())]
    #[case::hex(Encoding::BASE16, vec![0x80, 0xff], b"f80ff".to_vec())]
    #[case::emoji(Encoding::BASE256_EMOJI, vec![0x00], "\u{1F680}\u{1F680}".as_bytes().to_vec())]
    fn test_encode_to_vec(
        #[case] encoding: Encoding,
        #[case] data: Vec<u8>,
        #[case] expected: Vec<u8>,
    ) {
        assert_eq!(expected, encode_to_vec(encoding, &data).unwrap());
        assert_eq!((encoding, data), decode_bytes(&expected).unwrap());
    }

    #[test]
    fn test_encode_to_vec_matches_text() {
        for (_, encoding) in encodings() {
            let text = encode(encoding, b"text").unwrap();
            assert_eq!(text.into_bytes(), encode_to_vec(encoding, b"text").unwrap());
        }
    }

    #[test]
    fn test_identity_text_rejects_binary() {
        assert_eq!(
            Err(Error::MalformedInput(Malformed::NotText { valid_up_to: 1 })),
            encode(Encoding::IDENTITY, &[0, 0x80, 0xff])
        );
    }

    #[rstest]
    #[case::empty(b"".as_slice(), Error::EmptyInput)]
    #[case::bad_prefix(b"\xff00".as_slice(), Error::UnsupportedEncoding("byte 0xff".to_string()))]
    #[case::unknown_prefix(b"q\xff".as_slice(), Error::UnsupportedEncoding("'q' (U+0071)".to_string()))]
    #[case::binary_hex(b"f6\xff".as_slice(), Error::MalformedInput(Malformed::NotText { valid_up_to: 1 }))]
    fn test_decode_bytes_errors(#[case] text: &[u8], #[case] expected: Error) {
        assert_eq!(Err(expected), decode_bytes(text));
    }
}
