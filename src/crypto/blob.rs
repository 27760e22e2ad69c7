// src/crypto/blob.rs
use crate::consts::{BLOB_HEADER_HEX_LEN, NONCE_LEN, TAG_LEN};
use crate::error::{CoreError, Result};

/// Parsed form of a stored credential blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    pub nonce: [u8; NONCE_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Split a hex blob into its fixed-width header and ciphertext.
    ///
    /// Malformed input is reported as an authentication failure: a blob
    /// that cannot be parsed was truncated or tampered with.
    pub fn parse(blob: &str) -> Result<Self> {
        if blob.len() < BLOB_HEADER_HEX_LEN {
            return Err(CoreError::Authentication(
                "credential blob is truncated".into(),
            ));
        }

        let bytes = hex::decode(blob).map_err(|_| {
            CoreError::Authentication("credential blob is not valid hex".into())
        })?;

        let (nonce, rest) = bytes.split_at(NONCE_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        let mut parsed = EncryptedBlob {
            nonce: [0u8; NONCE_LEN],
            tag: [0u8; TAG_LEN],
            ciphertext: ciphertext.to_vec(),
        };
        parsed.nonce.copy_from_slice(nonce);
        parsed.tag.copy_from_slice(tag);
        Ok(parsed)
    }

    /// hex(nonce) ‖ hex(tag) ‖ hex(ciphertext), lowercase
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(BLOB_HEADER_HEX_LEN + self.ciphertext.len() * 2);
        out.push_str(&hex::encode(self.nonce));
        out.push_str(&hex::encode(self.tag));
        out.push_str(&hex::encode(&self.ciphertext));
        out
    }
}
