//! Binary codec: eight `'0'`/`'1'` digits per byte, most significant bit
//! first.

use crate::codec::invalid_symbol;
use crate::error::{Malformed, Result};

pub(crate) const DIGITS_PER_BYTE: usize = 8;

pub(crate) fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * DIGITS_PER_BYTE);
    for &byte in data {
        for shift in (0..DIGITS_PER_BYTE).rev() {
            out.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
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
            group
                .iter()
                .enumerate()
                .try_fold(0u8, |byte, (i, digit)| match digit {
                    b'0' => Ok(byte << 1),
                    b'1' => Ok((byte << 1) | 1),
                    _ => Err(invalid_symbol(payload, start + i)),
                })
        })
        .collect()
}
