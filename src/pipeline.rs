//! File encryption pipeline: the integration boundary between the cipher
//! core and the upload/download glue.
//!
//! Orchestrates buffer encryption plus hex encoding into a text payload,
//! and the reverse, re-attaching the caller-supplied MIME type out of
//! band. The payload itself is not self-describing: no magic bytes, no
//! version tag, no key check. The enclosing transport treats it as an
//! opaque octet stream.

use log::{debug, trace};

use crate::error::NlcaError;
use crate::nlca::Nlca;
use crate::utils::hex::{bytes_to_hex, hex_to_bytes};

/// Content type the text payload is tagged with by the enclosing
/// transport. The payload carries no type information of its own.
pub const PAYLOAD_CONTENT_TYPE: &str = "text/plain";

/// MIME type assumed for decrypted files when the caller has nothing
/// better recorded.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A decrypted file with its MIME type re-attached.
///
/// The cipher layer never embeds or validates a content type; `mime_type`
/// is whatever the caller supplied, carried alongside the bytes for the
/// download path's bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedFile {
    /// The recovered file contents.
    pub bytes: Vec<u8>,
    /// The externally supplied MIME type.
    pub mime_type: String,
}

/// Encrypts file contents under `key` and renders the ciphertext as a
/// lowercase-hex text payload.
///
/// The payload length is always `32 * ceil(n / 16)` characters. An empty
/// file yields an empty payload.
///
/// # Examples
///
/// ```
/// let payload = nlca::pipeline::encrypt_file(b"HELLO WORLD!!!!", "test");
/// assert_eq!(payload, "b98315929075d674fb172b285f38c6d0");
/// ```
pub fn encrypt_file(file: &[u8], key: &str) -> String {
    let engine = Nlca::with_passphrase(key);
    let ciphertext = engine.encrypt(file);
    let payload = bytes_to_hex(&ciphertext);
    debug!(
        "encrypted file: {} bytes in, {} hex chars out",
        file.len(),
        payload.len()
    );
    payload
}

/// Decodes a hex payload, decrypts it under `key`, and tags the result
/// with the caller-supplied `mime_type`.
///
/// A wrong key is not detectable here: decryption succeeds structurally
/// and yields garbage bytes.
///
/// # Errors
/// - [`NlcaError::OddHexLength`] / [`NlcaError::InvalidHexDigit`] if the
///   payload is not well-formed hex.
/// - [`NlcaError::InvalidInputLength`] if the decoded ciphertext is not a
///   multiple of 16 bytes.
///
/// # Examples
///
/// ```
/// use nlca::pipeline::{decrypt_file, encrypt_file, DEFAULT_MIME_TYPE};
///
/// let payload = encrypt_file(b"report body", "test");
/// let file = decrypt_file(&payload, "test", "application/pdf").unwrap();
/// assert_eq!(file.bytes, b"report body");
/// assert_eq!(file.mime_type, "application/pdf");
///
/// let fallback = decrypt_file(&payload, "test", DEFAULT_MIME_TYPE).unwrap();
/// assert_eq!(fallback.mime_type, "application/octet-stream");
/// ```
pub fn decrypt_file(
    hex_payload: &str,
    key: &str,
    mime_type: &str,
) -> Result<DecryptedFile, NlcaError> {
    let ciphertext = hex_to_bytes(hex_payload)?;
    let engine = Nlca::with_passphrase(key);
    let bytes = engine.decrypt(&ciphertext)?;
    debug!(
        "decrypted file: {} hex chars in, {} bytes out",
        hex_payload.len(),
        bytes.len()
    );
    trace!("tagging decrypted file as {}", mime_type);
    Ok(DecryptedFile {
        bytes,
        mime_type: mime_type.to_owned(),
    })
}
