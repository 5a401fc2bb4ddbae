//! Fetch the public key of a NIP-07 signer (the `window.nostr` object browser extensions inject)
//! and hand it back UTF-8 encoded.
//!
//! The provider is always passed in explicitly, [`fetcher::fetch_public_key`] works the same
//! against a browser extension, a [`providers::StaticProvider`], or any other
//! [`providers::PublicKeyProvider`] a host supplies. Only the JS facing `pubKey` export reads the
//! ambient `window.nostr`.

pub mod encoding;
pub mod error;
pub mod fetcher;
pub mod providers;
pub mod version;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod prelude {
    pub use crate::encoding::{decode_public_key, encode_public_key, EncodingError};
    pub use crate::error::*;
    pub use crate::fetcher::{fetch_public_key, try_fetch_public_key};
    pub use crate::providers::{ProviderError, PublicKeyProvider, StaticProvider};

    #[cfg(target_arch = "wasm32")]
    pub use crate::wasm::NostrExtension;
}
