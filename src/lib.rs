//! NLCA symmetric block cipher engine.
//!
//! NLCA obfuscates files before they are stored in a remote object store:
//! a 5-round Feistel-like transform over 16-byte blocks with a 4-bit
//! substitution box, round keys derived from an arbitrary-length key by a
//! 64-bit LCG, block-independent chaining with zero padding, and a
//! lowercase-hex text encoding as the storage/wire format.
//!
//! This crate provides the core cipher engine, compatible byte-for-byte
//! with the original JavaScript implementation.
//!
//! # Architecture
//!
//! ```text
//! KeySchedule (key bytes → 5 × u64 round keys via LCG)
//!     ↓
//! RoundFunction F (rotate + mask + S-box + recombine)
//!     ↓
//! Nlca engine   (5-round forward/inverse transform per 16-byte block,
//!     ↓          zero-padded block-independent chaining)
//! HexCodec      (ciphertext ↔ lowercase hex text)
//!     ↓
//! FilePipeline  (encrypt_file / decrypt_file + MIME bookkeeping)
//! ```
//!
//! # Security
//!
//! NLCA is a compatibility port, not a general-purpose cryptographic
//! library: there is no IV or chaining (identical plaintext blocks leak
//! equality under one key), no authentication tag (a wrong key decrypts
//! to garbage with no error signal), and zero depadding is ambiguous for
//! plaintexts with genuine trailing zero bytes. These limitations are
//! deliberate properties of the wire format being preserved.
//!
//! # Examples
//!
//! Encrypt and decrypt a buffer:
//!
//! ```
//! use nlca::Nlca;
//!
//! let engine = Nlca::with_passphrase("my_secret_key");
//! let ciphertext = engine.encrypt(b"attack at dawn");
//! assert_eq!(ciphertext.len() % 16, 0);
//! assert_eq!(engine.decrypt(&ciphertext).unwrap(), b"attack at dawn");
//! ```
//!
//! Produce and consume a storage payload:
//!
//! ```
//! use nlca::pipeline;
//!
//! let payload = pipeline::encrypt_file(b"file contents", "my_secret_key");
//! let file = pipeline::decrypt_file(&payload, "my_secret_key", "text/plain").unwrap();
//! assert_eq!(file.bytes, b"file contents");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod pipeline;
pub mod utils;

pub(crate) mod key_schedule;
mod nlca;
pub(crate) mod sbox;

pub use crate::error::NlcaError;
pub use crate::nlca::{decrypt, encrypt, Nlca, BLOCK_SIZE};
