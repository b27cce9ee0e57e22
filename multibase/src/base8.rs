//! Octal codec: three digits per byte, leading zeros kept, so `0x05`
//! becomes `"005"` and `0xff` becomes `"377"`.

use crate::codec::invalid_symbol;
use crate::error::{Error, Malformed, Result};

pub(crate) const DIGITS_PER_BYTE: usize = 3;

const DIGITS: [char; 8] = ['0', '1', '2', '3', '4', '5', '6', '7'];

pub(crate) fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * DIGITS_PER_BYTE);
    for &byte in data {
        out.push(DIGITS[usize::from(byte >> 6)]);
        out.push(DIGITS[usize::from((byte >> 3) & 0o7)]);
        out.push(DIGITS[usize::from(byte & 0o7)]);
    }
    out
}

pub(crate) fn decode(payload: &str) -> Result<Vec<u8>> {
    let digits = payload.as_bytes();
    if digits.len() % DIGITS_PER_BYTE != 0 {
        return Err(Malformed::Length {
            len: digits.len(),
            multiple: DIGITS_PER_BYTE,
        }
        .into());
    }

    digits
        .chunks_exact(DIGITS_PER_BYTE)
        .enumerate()
        .map(|(index, group)| {
            let start = index * DIGITS_PER_BYTE;
            let value = group
                .iter()
                .enumerate()
                .try_fold(0u16, |value, (i, digit)| match digit {
                    b'0'..=b'7' => Ok(value * 8 + u16::from(digit - b'0')),
                    _ => Err(invalid_symbol(payload, start + i)),
                })?;
            // "400" through "777" are well-formed octal but wider than a byte.
            u8::try_from(value).map_err(|_| Error::Overflow {
                group: payload[start..start + DIGITS_PER_BYTE].to_owned(),
                offset: start,
            })
        })
        .collect()
}
