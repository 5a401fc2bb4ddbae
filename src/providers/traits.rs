use async_trait::async_trait;

/// The capability a public key gets fetched from. In the browser this is the NIP-07 object an
/// extension injects as `window.nostr`, elsewhere it is whatever the host application hands us.
///
/// The provider is only ever borrowed. Its lifecycle, and whether it exists at all, belongs to
/// the environment that supplied it. Futures produced by implementors are not required to be
/// `Send` as JS promises can't cross threads.
#[async_trait(?Send)]
pub trait PublicKeyProvider {
    /// Ask the provider for its public key in textual form. This may block on user interaction
    /// (an extension permission prompt for example) and will not be retried or timed out by
    /// this library. Callers that need bounded latency have to wrap the call themselves.
    async fn get_public_key(&self) -> Result<String, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A catch-all for provider specific failures that don't fit the other variants.
    #[error("implementation specific error: {0}")]
    Implementation(String),

    /// The handle doesn't expose a callable `getPublicKey`.
    #[error("provider has no callable getPublicKey method")]
    MissingMethod,

    /// The request completed but produced something other than text.
    #[error("provider returned a public key that wasn't a string")]
    NotText,

    /// The provider threw or rejected the request. This is what a dismissed permission prompt
    /// looks like, the reason is whatever could be rendered out of the rejection value.
    #[error("provider rejected the request: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}
