use bitvec::prelude::*;
use log::debug;

use super::code_table::ReverseMapping;
use crate::error::{Error, Result};

/// Decode a buffer produced by [`encode`](super::encode).
///
/// The first byte is read as the padding count; the remaining bits, minus
/// that many trailing padding bits, are matched against `reverse` one bit at
/// a time until a complete code accumulates.
///
/// # Errors
///
/// Returns [`Error::CorruptStream`] if the header is missing or out of range,
/// the padding bits are not zero, or the data bits do not split exactly into
/// codes from `reverse`.
pub fn decode(bytes: &[u8], reverse: &ReverseMapping) -> Result<String> {
    let (&padding, body) = bytes
        .split_first()
        .ok_or_else(|| Error::CorruptStream("missing padding header".to_string()))?;
    if padding > 7 {
        return Err(Error::CorruptStream(format!(
            "padding count {} is out of range 0..=7",
            padding
        )));
    }

    let bits = body.view_bits::<Msb0>();
    let data_len = bits.len().checked_sub(padding as usize).ok_or_else(|| {
        Error::CorruptStream(format!(
            "padding count {} exceeds the {} available bits",
            padding,
            bits.len()
        ))
    })?;
    let (data, trailer) = bits.split_at(data_len);
    if trailer.any() {
        return Err(Error::CorruptStream("padding bits are not zero".to_string()));
    }
    debug!("decoding {} data bits, {} padding", data_len, padding);

    let mut text = String::new();
    let mut accumulator: BitVec<u8, Msb0> = BitVec::with_capacity(reverse.max_code_len());
    for (offset, bit) in data.iter().by_vals().enumerate() {
        accumulator.push(bit);
        if let Some(ch) = reverse.get(&accumulator) {
            text.push(ch);
            accumulator.clear();
        } else if accumulator.len() >= reverse.max_code_len() {
            return Err(Error::CorruptStream(format!(
                "no code matches the {} bits ending at bit {}",
                accumulator.len(),
                offset
            )));
        }
    }

    if !accumulator.is_empty() {
        return Err(Error::CorruptStream(format!(
            "{} trailing bits do not form a complete code",
            accumulator.len()
        )));
    }

    Ok(text)
}
