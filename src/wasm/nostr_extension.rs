use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::providers::{ProviderError, PublicKeyProvider};

const EXTENSION_PROPERTY: &str = "nostr";
const GET_PUBLIC_KEY_METHOD: &str = "getPublicKey";

/// The NIP-07 object a signer extension injects into the page.
pub struct NostrExtension {
    handle: JsValue,
}

impl NostrExtension {
    /// Wrap an arbitrary JS object as the extension. Only `undefined` counts as absent, anything
    /// else is taken as is and fails at request time if it isn't usable.
    pub fn from_js(handle: JsValue) -> Option<Self> {
        if handle.is_undefined() {
            return None;
        }

        Some(Self { handle })
    }

    /// Look up `window.nostr`. Absent outside of a window context (workers) or when no extension
    /// has injected itself into the page.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;

        match Reflect::get(&window, &JsValue::from_str(EXTENSION_PROPERTY)) {
            Ok(handle) => Self::from_js(handle),
            Err(err) => {
                tracing::debug!("reading window.{EXTENSION_PROPERTY} threw: {err:?}");
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl PublicKeyProvider for NostrExtension {
    async fn get_public_key(&self) -> Result<String, ProviderError> {
        let method = Reflect::get(&self.handle, &JsValue::from_str(GET_PUBLIC_KEY_METHOD))
            .map_err(rejection)?;

        let method = method
            .dyn_into::<Function>()
            .map_err(|_| ProviderError::MissingMethod)?;

        let result = method.call0(&self.handle).map_err(rejection)?;

        // Same as an `await` in JS, plain values pass through as an already resolved promise
        let public_key = JsFuture::from(Promise::resolve(&result))
            .await
            .map_err(rejection)?;

        public_key.as_string().ok_or(ProviderError::NotText)
    }
}

impl std::fmt::Debug for NostrExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{NostrExtension}")
    }
}

fn rejection(err: JsValue) -> ProviderError {
    ProviderError::Rejected(js_error_message(&err))
}

/// Rejection values are usually `Error` instances but extensions are free to reject with plain
/// strings (or anything else).
fn js_error_message(err: &JsValue) -> Option<String> {
    if let Some(message) = err.as_string() {
        return Some(message);
    }

    if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        return Some(String::from(js_err.message()));
    }

    if err.is_undefined() || err.is_null() {
        return None;
    }

    Some(format!("{err:?}"))
}
