mod nostr_extension;

pub use nostr_extension::NostrExtension;

use js_sys::Uint8Array;
use tracing::Level;
use tracing_wasm::{ConsoleConfig, WASMLayerConfigBuilder};
use wasm_bindgen::prelude::*;

use crate::fetcher::fetch_public_key;
use crate::providers::PublicKeyProvider;
use crate::version::full_version;

#[wasm_bindgen(start)]
pub fn wasm_init() -> Result<(), JsValue> {
    // Only run this in debug mode, in release mode this bloats up the library quite a bit
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    let wasm_log_config = if cfg!(debug_assertions) {
        WASMLayerConfigBuilder::default()
            .set_report_logs_in_timings(true)
            .set_max_level(Level::DEBUG)
            .set_console_config(ConsoleConfig::ReportWithoutConsoleColor)
            .build()
    } else {
        WASMLayerConfigBuilder::default()
            .set_report_logs_in_timings(false)
            .set_max_level(Level::INFO)
            .set_console_config(ConsoleConfig::ReportWithoutConsoleColor)
            .build()
    };

    tracing_wasm::set_as_global_default_with_config(wasm_log_config);
    tracing::debug!("loaded nostr-pubkey WASM module {}", full_version());

    Ok(())
}

/// Ask the page's NIP-07 extension for its public key. Resolves to the UTF-8 bytes of the key as
/// a `Uint8Array`, or `null` when there is no extension or the request failed for any reason
/// (including the user closing the permission popup). Never rejects.
#[wasm_bindgen(js_name = pubKey)]
pub async fn pub_key() -> JsValue {
    let extension = NostrExtension::from_window();
    let provider = extension.as_ref().map(|ext| ext as &dyn PublicKeyProvider);

    match fetch_public_key(provider).await {
        Some(encoded_key) => Uint8Array::from(encoded_key.as_slice()).into(),
        None => JsValue::NULL,
    }
}
