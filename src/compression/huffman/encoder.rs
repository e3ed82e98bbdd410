use bitvec::prelude::*;
use log::debug;

use super::code_table::CodeTable;
use crate::error::{Error, Result};

/// Number of zero bits needed to bring `bit_len` up to a byte boundary.
///
/// Always in `0..=7`; an already aligned stream gets no padding at all.
pub fn padding_for(bit_len: usize) -> u8 {
    ((8 - bit_len % 8) % 8) as u8
}

/// Concatenate the code of every symbol of `text`, in order.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] if `text` contains a symbol the table has
/// no code for, meaning the table was built from a different text.
pub fn encode_bits(text: &str, code_table: &CodeTable) -> Result<BitVec<u8, Msb0>> {
    let mut bits: BitVec<u8, Msb0> = BitVec::new();
    for ch in text.chars() {
        let code = code_table.get(ch).ok_or(Error::UnknownSymbol(ch))?;
        bits.extend_from_bitslice(code);
    }
    Ok(bits)
}

/// Encode `text` into the on-disk format.
///
/// Byte 0 holds the padding count `p`; the encoded bits follow MSB first,
/// and the final byte ends in `p` zero bits.
///
/// # Example
///
/// ```
/// use huffpack::compression::huffman::{encode, CodeTable, FrequencyTable, HuffmanTree};
///
/// let freq = FrequencyTable::from_text("aaabbc");
/// let table = CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap()).unwrap();
/// // a=0 c=10 b=11: "000" "11" "11" "10" is 9 bits, padded by 7
/// assert_eq!(encode("aaabbc", &table).unwrap(), vec![7, 0b0001_1111, 0b0000_0000]);
/// ```
pub fn encode(text: &str, code_table: &CodeTable) -> Result<Vec<u8>> {
    let bits = encode_bits(text, code_table)?;
    let padding = padding_for(bits.len());
    debug!(
        "encoded {} symbols into {} bits, {} padding",
        text.chars().count(),
        bits.len(),
        padding
    );

    let mut packed: BitVec<u8, Msb0> = BitVec::with_capacity(8 + bits.len() + 7);
    packed.extend_from_bitslice(padding.view_bits::<Msb0>());
    packed.extend_from_bitslice(bits.as_bitslice());
    packed.resize(packed.len() + padding as usize, false);
    debug_assert_eq!(packed.len() % 8, 0);

    Ok(packed.into_vec())
}
