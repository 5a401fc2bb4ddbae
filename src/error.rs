use crate::providers::ProviderError;

/// Why a public key couldn't be fetched. Only visible through
/// [`try_fetch_public_key`](crate::fetcher::try_fetch_public_key), the plain fetch collapses all
/// of these to an absent key after logging them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No provider exists in this environment. In a browser this means no NIP-07 extension has
    /// injected itself into the page.
    #[error("public key provider is not available")]
    CapabilityUnavailable,

    #[error("public key request failed: {0}")]
    OperationFailed(#[from] ProviderError),
}

pub type FetchResult<T> = Result<T, FetchError>;
