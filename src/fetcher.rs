use tracing::{debug, error, warn};

use crate::encoding::encode_public_key;
use crate::error::{FetchError, FetchResult};
use crate::providers::PublicKeyProvider;

/// Fetch the public key from the provider, if there is one, and return it UTF-8 encoded.
///
/// This never fails from the caller's point of view. A missing provider and a failed request
/// both get logged and come back as `None`, it is up to the caller to decide whether to prompt,
/// retry or give up. Use [`try_fetch_public_key`] when the reason matters.
pub async fn fetch_public_key(provider: Option<&dyn PublicKeyProvider>) -> Option<Vec<u8>> {
    match try_fetch_public_key(provider).await {
        Ok(encoded_key) => Some(encoded_key),
        Err(FetchError::CapabilityUnavailable) => {
            warn!("no public key provider is available");
            None
        }
        Err(err) => {
            error!("failed to fetch public key: {err}");
            None
        }
    }
}

/// A single attempt at fetching and encoding the public key with the failure reason kept
/// intact. Doesn't log failures, that is left to the caller.
pub async fn try_fetch_public_key(
    provider: Option<&dyn PublicKeyProvider>,
) -> FetchResult<Vec<u8>> {
    let provider = provider.ok_or(FetchError::CapabilityUnavailable)?;

    let public_key = provider.get_public_key().await?;
    let encoded_key = encode_public_key(&public_key);
    debug!(encoded_len = encoded_key.len(), "fetched public key");

    Ok(encoded_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::providers::{ProviderError, StaticProvider};

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test(async))]
    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    async fn test_absent_provider() {
        assert_eq!(fetch_public_key(None).await, None);

        let err = try_fetch_public_key(None).await.unwrap_err();
        assert!(matches!(err, FetchError::CapabilityUnavailable));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test(async))]
    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    async fn test_resolved_key_is_encoded() {
        let provider = StaticProvider::resolving("abc123");

        let encoded = fetch_public_key(Some(&provider)).await;
        assert_eq!(encoded.as_deref(), Some(&b"abc123"[..]));
        assert_eq!(provider.request_count(), 1);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test(async))]
    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    async fn test_rejection_keeps_reason() {
        let provider = StaticProvider::rejecting("user dismissed prompt");

        assert_eq!(fetch_public_key(Some(&provider)).await, None);

        let err = try_fetch_public_key(Some(&provider)).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::OperationFailed(ProviderError::Rejected(Some(_)))
        ));
        assert_eq!(
            err.to_string(),
            "public key request failed: provider rejected the request: user dismissed prompt"
        );

        // Each call is a single attempt, nothing gets retried internally
        assert_eq!(provider.request_count(), 2);
    }
}
