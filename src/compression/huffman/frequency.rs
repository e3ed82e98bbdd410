use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use crate::error::{Error, Result};

/// Occurrence counts of every symbol in a text.
///
/// Backed by an ordered map so that iteration is by symbol, which keeps tree
/// construction reproducible from one run to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    /// Count every character of `text`.
    ///
    /// Never fails; an empty text yields an empty table, which the tree
    /// builder rejects.
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    /// Count of `ch`, or `None` if it never occurred.
    pub fn get(&self, ch: char) -> Option<usize> {
        self.counts.get(&ch).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted text in chars.
    ///
    /// Saturates at `usize::MAX` for hand-built tables.
    pub fn total(&self) -> usize {
        self.counts.values().fold(0, |acc, &count| acc.saturating_add(count))
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }

    /// Serialize as a codebook: `u32` entry count, then per entry the symbol
    /// as a `u32` scalar value and its count as `u64`, all little-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.counts.len() * 12);
        bytes.extend_from_slice(&(self.counts.len() as u32).to_le_bytes());
        for (&ch, &count) in &self.counts {
            bytes.extend_from_slice(&u32::from(ch).to_le_bytes());
            bytes.extend_from_slice(&(count as u64).to_le_bytes());
        }
        bytes
    }

    /// Parse a codebook written by [`FrequencyTable::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);

        let mut count_bytes = [0u8; 4];
        cursor
            .read_exact(&mut count_bytes)
            .map_err(|_| Error::InvalidCodebook("missing entry count".to_string()))?;
        let entries = u32::from_le_bytes(count_bytes) as usize;

        let mut counts = BTreeMap::new();
        let mut previous: Option<char> = None;
        let mut total: usize = 0;
        for index in 0..entries {
            let mut symbol_bytes = [0u8; 4];
            let mut freq_bytes = [0u8; 8];
            cursor
                .read_exact(&mut symbol_bytes)
                .and_then(|_| cursor.read_exact(&mut freq_bytes))
                .map_err(|_| {
                    Error::InvalidCodebook(format!("entry {} of {} is truncated", index, entries))
                })?;

            let scalar = u32::from_le_bytes(symbol_bytes);
            let ch = char::from_u32(scalar).ok_or_else(|| {
                Error::InvalidCodebook(format!("{:#x} is not a Unicode scalar value", scalar))
            })?;
            if previous.is_some_and(|prev| prev >= ch) {
                return Err(Error::InvalidCodebook(format!(
                    "symbol {:?} is duplicated or out of order",
                    ch
                )));
            }

            let count = usize::try_from(u64::from_le_bytes(freq_bytes)).map_err(|_| {
                Error::InvalidCodebook(format!("count for {:?} does not fit in memory", ch))
            })?;
            if count == 0 {
                return Err(Error::InvalidCodebook(format!("symbol {:?} has a zero count", ch)));
            }
            total = total.checked_add(count).ok_or_else(|| {
                Error::InvalidCodebook(format!("total count overflows at symbol {:?}", ch))
            })?;

            counts.insert(ch, count);
            previous = Some(ch);
        }

        if (cursor.position() as usize) != data.len() {
            return Err(Error::InvalidCodebook(format!(
                "{} trailing bytes after {} entries",
                data.len() - cursor.position() as usize,
                entries
            )));
        }

        Ok(FrequencyTable { counts })
    }
}

/// Collect `(symbol, count)` pairs, summing repeats and dropping zero counts.
impl FromIterator<(char, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (ch, count) in iter {
            if count > 0 {
                let entry = counts.entry(ch).or_insert(0usize);
                *entry = entry.saturating_add(count);
            }
        }
        FrequencyTable { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table() {
        let freq = FrequencyTable::from_text("aabccc");
        assert_eq!(freq.get('a'), Some(2));
        assert_eq!(freq.get('b'), Some(1));
        assert_eq!(freq.get('c'), Some(3));
        assert_eq!(freq.get('d'), None);
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn test_total_matches_text_length() {
        let text = "the quick brown fox — jumps over the lazy dog ünïcödé";
        let freq = FrequencyTable::from_text(text);
        assert_eq!(freq.total(), text.chars().count());
    }

    #[test]
    fn test_empty_text() {
        let freq = FrequencyTable::from_text("");
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn test_iteration_is_ordered() {
        let freq = FrequencyTable::from_text("zyxzyz");
        let symbols: Vec<char> = freq.iter().map(|(ch, _)| ch).collect();
        assert_eq!(symbols, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_from_iter_drops_zero_counts() {
        let freq: FrequencyTable = vec![('a', 2), ('b', 0), ('a', 1)].into_iter().collect();
        assert_eq!(freq.get('a'), Some(3));
        assert_eq!(freq.get('b'), None);
    }

    #[test]
    fn test_codebook_bytes() {
        let freq = FrequencyTable::from_text("aab");
        let bytes = freq.to_bytes();
        assert_eq!(
            bytes,
            vec![
                2, 0, 0, 0, // entries
                b'a', 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, // 'a' x2
                b'b', 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, // 'b' x1
            ]
        );
        assert_eq!(FrequencyTable::from_bytes(&bytes).unwrap(), freq);
    }

    #[test]
    fn test_codebook_rejects_truncation() {
        let bytes = FrequencyTable::from_text("hello").to_bytes();
        let result = FrequencyTable::from_bytes(&bytes[..bytes.len() - 3]);
        assert!(matches!(result, Err(Error::InvalidCodebook(_))));

        assert!(matches!(
            FrequencyTable::from_bytes(&[1, 0]),
            Err(Error::InvalidCodebook(_))
        ));
    }

    #[test]
    fn test_codebook_rejects_trailing_bytes() {
        let mut bytes = FrequencyTable::from_text("hello").to_bytes();
        bytes.push(0);
        assert!(matches!(
            FrequencyTable::from_bytes(&bytes),
            Err(Error::InvalidCodebook(_))
        ));
    }

    #[test]
    fn test_codebook_rejects_bad_entries() {
        // surrogate code point
        let mut bytes = vec![1, 0, 0, 0];
        bytes.extend_from_slice(&0xD800u32.to_le_bytes());
        bytes.extend_from_slice(&1u64.to_le_bytes());
        assert!(FrequencyTable::from_bytes(&bytes).is_err());

        // zero count
        let mut bytes = vec![1, 0, 0, 0];
        bytes.extend_from_slice(&u32::from('a').to_le_bytes());
        bytes.extend_from_slice(&0u64.to_le_bytes());
        assert!(FrequencyTable::from_bytes(&bytes).is_err());

        // out of order
        let mut bytes = vec![2, 0, 0, 0];
        for ch in ['b', 'a'] {
            bytes.extend_from_slice(&u32::from(ch).to_le_bytes());
            bytes.extend_from_slice(&1u64.to_le_bytes());
        }
        assert!(FrequencyTable::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_codebook_rejects_overflowing_total() {
        let mut bytes = vec![2, 0, 0, 0];
        for ch in ['a', 'b'] {
            bytes.extend_from_slice(&u32::from(ch).to_le_bytes());
            bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        }
        assert!(matches!(
            FrequencyTable::from_bytes(&bytes),
            Err(Error::InvalidCodebook(_))
        ));
    }
}
