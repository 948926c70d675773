//! NLCA: 16-byte-block symmetric cipher engine.
//!
//! Implements the 5-round Feistel-like forward/inverse transform, the
//! keyed round function, and the block-independent chaining layer with
//! zero padding. Compatible byte-for-byte with the JavaScript
//! `NLCACore`/`NLCAEncryption`/`NLCADecryption` hierarchy, collapsed here
//! into a single engine sharing one round-key set.

use crate::error::NlcaError;
use crate::key_schedule::{RoundKeys, NUM_ROUNDS};
use crate::sbox::substitute;
use crate::utils::converter::{block_to_words, words_to_block};

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Symmetric block cipher engine operating on 16-byte blocks.
///
/// The engine derives its five round keys once at construction and holds
/// no other state; every operation is a pure function of the input and
/// the round keys, so a single engine may serve any number of calls and
/// blocks may be processed in any order.
///
/// Blocks are encrypted independently (no IV, no chaining), so identical
/// plaintext blocks under one key produce identical ciphertext blocks.
/// That leakage, and the absence of any integrity check, are compatibility
/// properties of the original wire format.
///
/// # Examples
///
/// Encrypt and decrypt a buffer:
///
/// ```
/// use nlca::Nlca;
///
/// let engine = Nlca::with_passphrase("test");
/// let ciphertext = engine.encrypt(b"HELLO WORLD!!!!");
/// assert_eq!(ciphertext.len() % 16, 0);
///
/// let plaintext = engine.decrypt(&ciphertext).unwrap();
/// assert_eq!(plaintext, b"HELLO WORLD!!!!");
/// ```
pub struct Nlca {
    round_keys: RoundKeys,
}

impl Nlca {
    /// Creates an engine from raw key bytes.
    ///
    /// Any length is accepted, including empty; bytes beyond the 8th
    /// displace the oldest bits of the key-schedule seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlca::Nlca;
    ///
    /// let engine = Nlca::new(&[0x74, 0x65, 0x73, 0x74]);
    /// let roundtrip = engine.decrypt(&engine.encrypt(b"payload")).unwrap();
    /// assert_eq!(roundtrip, b"payload");
    /// ```
    pub fn new(key: &[u8]) -> Self {
        Nlca {
            round_keys: RoundKeys::derive(key),
        }
    }

    /// Creates an engine from a passphrase, using its UTF-8 bytes as the key.
    ///
    /// Mirrors the string branch of the `NLCACore` constructor.
    pub fn with_passphrase(passphrase: &str) -> Self {
        Self::new(passphrase.as_bytes())
    }

    // ──────── Round function ────────

    /// The keyed non-linear mixing step `F`.
    ///
    /// Rotates the input left by 4, masks it with the low 32 bits of the
    /// round key, substitutes nibble-wise, and ORs the key bits back in.
    fn f_function(input: u32, round_key: u64) -> u32 {
        let rk32 = round_key as u32;
        let masked = input.rotate_left(4) & rk32;
        substitute(masked) | rk32
    }

    // ──────── Single-block transforms ────────

    /// Encrypts one 16-byte block in place.
    ///
    /// The block is read as four big-endian 32-bit words (A, B, C, D) and
    /// run through five rounds of the forward transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlca::Nlca;
    ///
    /// let engine = Nlca::with_passphrase("secret");
    /// let original = *b"0123456789abcdef";
    /// let mut block = original;
    ///
    /// engine.encrypt_block(&mut block);
    /// assert_ne!(block, original);
    ///
    /// engine.decrypt_block(&mut block);
    /// assert_eq!(block, original);
    /// ```
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let [mut a, mut b, mut c, mut d] = block_to_words(block);

        for i in 0..NUM_ROUNDS {
            let rk = self.round_keys.round_key(i);
            let rk32 = self.round_keys.round_key_32(i);

            let x = !(a ^ rk32);
            let y = !(d ^ rk32);
            let fx = Self::f_function(x, rk);
            let fy = Self::f_function(y, rk);

            (a, b, c, d) = (b ^ fy, y, x, c ^ fx);
        }

        *block = words_to_block(&[a, b, c, d]);
    }

    /// Decrypts one 16-byte block in place.
    ///
    /// Applies the inverse transform for rounds 4 down to 0, consuming
    /// the round keys in reverse order. Exactly recovers the pre-round
    /// state of each forward round.
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let [mut a, mut b, mut c, mut d] = block_to_words(block);

        for i in (0..NUM_ROUNDS).rev() {
            let rk = self.round_keys.round_key(i);
            let rk32 = self.round_keys.round_key_32(i);

            let x = c;
            let y = b;
            let fx = Self::f_function(x, rk);
            let fy = Self::f_function(y, rk);

            (a, b, c, d) = (!x ^ rk32, a ^ fy, d ^ fx, !y ^ rk32);
        }

        *block = words_to_block(&[a, b, c, d]);
    }

    // ──────── Buffer-level chaining ────────

    /// Encrypts an arbitrary-length buffer.
    ///
    /// The input is split into consecutive 16-byte blocks, the final block
    /// zero-padded on the right, and each block encrypted independently.
    /// An input whose length is already a multiple of 16 gains no extra
    /// block. The result length is always a multiple of 16; an empty input
    /// yields an empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlca::Nlca;
    ///
    /// let engine = Nlca::with_passphrase("key");
    /// assert_eq!(engine.encrypt(b"abc").len(), 16);
    /// assert_eq!(engine.encrypt(&[0u8; 16]).len(), 16);
    /// assert_eq!(engine.encrypt(&[0u8; 17]).len(), 32);
    /// assert!(engine.encrypt(b"").is_empty());
    /// ```
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let padded_len = plaintext.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
        let mut ciphertext = Vec::with_capacity(padded_len);

        for chunk in plaintext.chunks(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block[..chunk.len()].copy_from_slice(chunk);
            self.encrypt_block(&mut block);
            ciphertext.extend_from_slice(&block);
        }
        ciphertext
    }

    /// Decrypts a buffer produced by [`encrypt`](Self::encrypt).
    ///
    /// Each 16-byte block is decrypted independently, the results are
    /// concatenated, and all trailing `0x00` bytes are stripped from the
    /// reassembled buffer. Genuine trailing zero bytes in the original
    /// plaintext are indistinguishable from padding and are removed too.
    ///
    /// # Errors
    /// Returns [`NlcaError::InvalidInputLength`] if the input length is
    /// not a multiple of 16. No partial decryption is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlca::{Nlca, NlcaError};
    ///
    /// let engine = Nlca::with_passphrase("key");
    /// assert_eq!(
    ///     engine.decrypt(&[0u8; 15]),
    ///     Err(NlcaError::InvalidInputLength { len: 15 })
    /// );
    /// ```
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, NlcaError> {
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(NlcaError::InvalidInputLength {
                len: ciphertext.len(),
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.decrypt_block(&mut block);
            plaintext.extend_from_slice(&block);
        }

        // Depad over the whole reassembled buffer, not per block.
        while plaintext.last() == Some(&0) {
            plaintext.pop();
        }
        Ok(plaintext)
    }

    /// Decrypts a buffer and decodes the result as UTF-8.
    ///
    /// Invalid sequences are replaced rather than rejected, matching the
    /// JavaScript `TextDecoder` behavior of `decryptToString`.
    ///
    /// # Errors
    /// Same as [`decrypt`](Self::decrypt).
    pub fn decrypt_to_string(&self, ciphertext: &[u8]) -> Result<String, NlcaError> {
        let plaintext = self.decrypt(ciphertext)?;
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }
}

/// Encrypts `plaintext` under `key` in one shot.
///
/// Round keys are derived for this call and discarded with the temporary
/// engine. The result length is always a multiple of 16.
///
/// # Examples
///
/// ```
/// let ciphertext = nlca::encrypt(b"HELLO WORLD!!!!", b"test");
/// assert_eq!(ciphertext.len(), 16);
/// ```
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Vec<u8> {
    Nlca::new(key).encrypt(plaintext)
}

/// Decrypts `ciphertext` under `key` in one shot, stripping trailing
/// zero bytes from the reassembled buffer.
///
/// # Errors
/// Returns [`NlcaError::InvalidInputLength`] if `ciphertext.len()` is not
/// a multiple of 16.
///
/// # Examples
///
/// ```
/// let ciphertext = nlca::encrypt(b"HELLO WORLD!!!!", b"test");
/// let plaintext = nlca::decrypt(&ciphertext, b"test").unwrap();
/// assert_eq!(plaintext, b"HELLO WORLD!!!!");
/// ```
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, NlcaError> {
    Nlca::new(key).decrypt(ciphertext)
}
