//! The text to bytes transform applied to fetched public keys. Whatever verifies these keys
//! further down the line has to agree on the encoding, which is UTF-8 (the same thing a browser
//! `TextEncoder` produces).

/// Encode a public key as the UTF-8 bytes of its text. Deterministic, the same text always
/// produces the same bytes.
pub fn encode_public_key(public_key: &str) -> Vec<u8> {
    public_key.as_bytes().to_vec()
}

/// Recover the textual public key from its encoded form.
pub fn decode_public_key(bytes: &[u8]) -> Result<String, EncodingError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("encoded public key is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
