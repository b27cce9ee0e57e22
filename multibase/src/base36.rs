//! Base36 codec over `0-9a-z`.
//!
//! The payload is read as one big-endian integer and rewritten in radix 36.
//! Leading zero bytes carry no value, so each one is emitted as a leading
//! `'0'` digit instead and restored one for one on decode.

use num_bigint::BigUint;

use crate::codec::invalid_symbol;
use crate::error::Result;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub(crate) fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&byte| byte == 0).count();
    let mut out = "0".repeat(zeros);
    let rest = &data[zeros..];
    if !rest.is_empty() {
        out.extend(
            BigUint::from_bytes_be(rest)
                .to_radix_be(36)
                .into_iter()
                .map(|digit| char::from(ALPHABET[usize::from(digit)])),
        );
    }
    out
}

pub(crate) fn decode(payload: &str) -> Result<Vec<u8>> {
    let zeros = payload.bytes().take_while(|&b| b == b'0').count();
    let mut out = vec![0u8; zeros];
    let rest = &payload[zeros..];
    if rest.is_empty() {
        return Ok(out);
    }

    let mut value = BigUint::default();
    for (i, symbol) in rest.char_indices() {
        let digit = match symbol {
            '0'..='9' => u32::from(symbol) - u32::from('0'),
            'a'..='z' => u32::from(symbol) - u32::from('a') + 10,
            _ => return Err(invalid_symbol(payload, zeros + i)),
        };
        value = value * 36u32 + digit;
    }
    out.extend(value.to_bytes_be());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{decode, encode};
    use crate::error::{Error, Malformed};

    #[rstest]
    #[case::empty(vec![], "")]
    #[case::single_zero(vec![0], "0")]
    #[case::zeros(vec![0, 0, 0], "000")]
    #[case::leading_zeros(vec![0, 0, 1], "001")]
    #[case::radix(vec![36], "10")]
    #[case::sample(
        b"Decentralize everything!!!".to_vec(),
        "m552ng4dabi4neu1oo8l4i5mndwmpc3mkukwtxy9"
    )]
    fn test_encode(#[case] data: Vec<u8>, #[case] expected: &str) {
        assert_eq!(expected, encode(&data));
        assert_eq!(data, decode(expected).unwrap());
    }

    #[rstest]
    #[case::upper("00A", Malformed::InvalidSymbol { symbol: 'A', offset: 2 })]
    #[case::punctuation("1!", Malformed::InvalidSymbol { symbol: '!', offset: 1 })]
    fn test_decode_rejects(#[case] payload: &str, #[case] expected: Malformed) {
        assert_eq!(Err(Error::MalformedInput(expected)), decode(payload));
    }
}
