use std::cell::Cell;

use async_trait::async_trait;

use crate::providers::{ProviderError, PublicKeyProvider};

/// A provider with a predetermined answer. Hosts that already hold their public key can hand
/// one of these to the fetcher, and it stands in for a browser extension when one isn't around.
#[derive(Debug)]
pub struct StaticProvider {
    outcome: StaticOutcome,
    requests: Cell<usize>,
}

#[derive(Debug, Clone)]
enum StaticOutcome {
    Resolve(String),
    Reject(Option<String>),
}

impl StaticProvider {
    /// Every request will fail as if the user dismissed the prompt, with the provided reason.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self::with_outcome(StaticOutcome::Reject(Some(reason.into())))
    }

    /// The number of times this provider has been asked for its key.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    /// Every request will succeed with the provided key.
    pub fn resolving(public_key: impl Into<String>) -> Self {
        Self::with_outcome(StaticOutcome::Resolve(public_key.into()))
    }

    fn with_outcome(outcome: StaticOutcome) -> Self {
        Self {
            outcome,
            requests: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl PublicKeyProvider for StaticProvider {
    async fn get_public_key(&self) -> Result<String, ProviderError> {
        self.requests.set(self.requests.get() + 1);

        match &self.outcome {
            StaticOutcome::Resolve(key) => Ok(key.clone()),
            StaticOutcome::Reject(reason) => Err(ProviderError::Rejected(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test(async))]
    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    async fn test_resolving_provider_counts_requests() {
        let provider = StaticProvider::resolving("abc123");
        assert_eq!(provider.request_count(), 0);

        assert_eq!(provider.get_public_key().await.unwrap(), "abc123");
        assert_eq!(provider.get_public_key().await.unwrap(), "abc123");
        assert_eq!(provider.request_count(), 2);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test(async))]
    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    async fn test_rejecting_provider_reports_reason() {
        let provider = StaticProvider::rejecting("popup closed");

        let err = provider.get_public_key().await.unwrap_err();
        assert!(matches!(&err, ProviderError::Rejected(Some(reason)) if reason == "popup closed"));
        assert_eq!(err.to_string(), "provider rejected the request: popup closed");
        assert_eq!(provider.request_count(), 1);
    }
}
