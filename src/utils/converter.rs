//! Block ↔ word conversion using big-endian byte ordering.
//!
//! A 16-byte block is interpreted as four unsigned 32-bit words where the
//! first byte of each group occupies the most significant position,
//! matching the JavaScript implementation's `DataView.getUint32(_, false)`.

use crate::nlca::BLOCK_SIZE;

/// Unpacks a 16-byte block into its four big-endian 32-bit words (A, B, C, D).
pub(crate) fn block_to_words(block: &[u8; BLOCK_SIZE]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (i, word) in words.iter_mut().enumerate() {
        *word = u32::from_be_bytes([
            block[4 * i],
            block[4 * i + 1],
            block[4 * i + 2],
            block[4 * i + 3],
        ]);
    }
    words
}

/// Packs four 32-bit words back into a 16-byte block, big-endian.
pub(crate) fn words_to_block(words: &[u32; 4]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    for (i, word) in words.iter().enumerate() {
        block[4 * i..4 * i + 4].copy_from_slice(&word.to_be_bytes());
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_to_words_basic() {
        let block: [u8; 16] = [
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ];
        let words = block_to_words(&block);
        assert_eq!(words, [0x0123_4567, 0x89AB_CDEF, 0xFEDC_BA98, 0x7654_3210]);
    }

    #[test]
    fn test_words_to_block_basic() {
        let words = [0x0123_4567, 0x89AB_CDEF, 0xFEDC_BA98, 0x7654_3210];
        let block = words_to_block(&words);
        assert_eq!(
            block,
            [
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76,
                0x54, 0x32, 0x10,
            ]
        );
    }

    #[test]
    fn test_roundtrip() {
        let original: [u8; 16] = core::array::from_fn(|i| (i as u8).wrapping_mul(17));
        let words = block_to_words(&original);
        let block = words_to_block(&words);
        assert_eq!(block, original);
    }

    #[test]
    fn test_all_zeros() {
        let words = block_to_words(&[0u8; 16]);
        assert_eq!(words, [0u32; 4]);
        assert_eq!(words_to_block(&[0u32; 4]), [0u8; 16]);
    }

    #[test]
    fn test_all_ones() {
        let words = block_to_words(&[0xFFu8; 16]);
        assert_eq!(words, [u32::MAX; 4]);
        assert_eq!(words_to_block(&[u32::MAX; 4]), [0xFFu8; 16]);
    }
}
